//! Hand-authored preset lines and static fallback melodies.

use canonic_spec::note::NoteLength::{Eighth as E, Quarter as Q};
use canonic_spec::StepTemplate;

/// Builds a preset line from anchor offsets.
///
/// Every step is an eighth note except the last, which is a quarter. Without
/// explicit accents the first step is 1.0 and later steps fall by 0.04 from 0.9.
pub fn preset_line(offsets: &[i32], accents: Option<&[f64]>) -> Vec<StepTemplate> {
    let last = offsets.len().saturating_sub(1);
    offsets
        .iter()
        .enumerate()
        .map(|(idx, &offset)| {
            let duration = if idx == last { Q } else { E };
            let accent = accents
                .and_then(|a| a.get(idx).copied())
                .unwrap_or(if idx == 0 { 1.0 } else { 0.9 - idx as f64 * 0.04 });
            StepTemplate::offset(offset, duration, accent)
        })
        .collect()
}

fn pattern(steps: &[(i32, canonic_spec::NoteLength, f64)]) -> Vec<StepTemplate> {
    steps
        .iter()
        .map(|&(offset, duration, accent)| StepTemplate::offset(offset, duration, accent))
        .collect()
}

/// Stepwise descent and return; also the registry-wide default.
pub fn descending_pattern() -> Vec<StepTemplate> {
    pattern(&[
        (0, E, 1.0),
        (-1, E, 0.92),
        (-2, E, 0.88),
        (-3, E, 0.92),
        (-4, E, 0.95),
        (-3, E, 0.9),
        (-2, E, 0.92),
        (-1, E, 0.94),
    ])
}

pub fn passing_pattern() -> Vec<StepTemplate> {
    pattern(&[
        (0, Q, 1.0),
        (-2, E, 0.92),
        (-1, E, 0.88),
        (1, Q, 0.96),
        (0, E, 0.9),
        (-2, E, 0.88),
        (-4, Q, 0.94),
        (-2, Q, 0.96),
    ])
}

pub fn rising_pattern() -> Vec<StepTemplate> {
    pattern(&[
        (0, E, 1.0),
        (-2, E, 0.9),
        (-4, E, 0.92),
        (-5, E, 0.95),
        (-3, E, 0.9),
        (-1, E, 0.88),
        (1, E, 0.92),
        (0, E, 0.96),
    ])
}

pub fn classic_lines() -> Vec<Vec<StepTemplate>> {
    vec![
        preset_line(
            &[0, -1, -2, -3, -4, -3, -2, -1],
            Some(&[1.0, 0.95, 0.92, 0.9, 0.88, 0.9, 0.93, 0.96]),
        ),
        preset_line(&[-1, -2, -3, -4, -3, -2, -1, 0], None),
        preset_line(&[-2, -3, -4, -5, -4, -3, -2, -1], None),
        preset_line(&[-3, -4, -5, -6, -5, -4, -3, -2], None),
        preset_line(&[-2, -1, 0, 1, 0, -1, -2, -3], None),
        preset_line(&[-1, 0, 1, 2, 1, 0, -1, -2], None),
        preset_line(&[-2, -3, -4, -3, -2, -1, 0, 1], None),
        preset_line(&[-1, -2, -3, -2, -1, 0, 1, 2], None),
    ]
}

pub fn passing_lines() -> Vec<Vec<StepTemplate>> {
    vec![
        preset_line(&[0, -2, -1, 1, 0, -1, -2, -3], None),
        preset_line(&[-1, 1, 0, -1, -2, -1, 0, 1], None),
        preset_line(&[-2, 0, 1, 2, 1, 0, -1, -2], None),
        preset_line(&[-3, -1, 0, 1, 0, -1, -2, -3], None),
        preset_line(&[-2, -3, -1, 0, -1, -2, -3, -4], None),
        preset_line(&[-1, 0, 2, 3, 2, 1, 0, -1], None),
        preset_line(&[-2, -1, 1, 2, 1, 0, -1, -2], None),
        preset_line(&[-1, 0, 1, 2, 3, 2, 1, 0], None),
    ]
}

pub fn rise_lines() -> Vec<Vec<StepTemplate>> {
    vec![
        preset_line(&[0, -1, 1, 2, 3, 2, 1, 0], None),
        preset_line(&[1, 2, 3, 4, 3, 2, 1, 0], None),
        preset_line(&[2, 3, 5, 4, 3, 2, 1, 0], None),
        preset_line(&[1, 0, -1, -2, -1, 0, 1, 2], None),
        preset_line(&[0, 1, 2, 3, 4, 3, 2, 1], None),
        preset_line(&[1, 2, 3, 4, 5, 4, 3, 2], None),
        preset_line(&[2, 1, 0, 1, 2, 3, 2, 1], None),
        preset_line(&[1, 0, -1, 0, 1, 2, 3, 4], None),
    ]
}
