//! Completion derivation rules for unit progress.
//!
//! Completion is always derived from the stored counts; it is never a
//! directly settable flag.

/// A unit is complete iff its video was watched and every quiz question
/// has been answered.
pub fn unit_complete(video_completed: bool, questions_completed: u32, total_questions: u32) -> bool {
    video_completed && questions_completed >= total_questions
}

/// A chapter is complete iff every one of its units is complete.
///
/// `unit_flags` carries the derived per-unit completion in catalog order;
/// an empty chapter is never complete.
pub fn chapter_complete(unit_flags: &[bool]) -> bool {
    !unit_flags.is_empty() && unit_flags.iter().all(|&done| done)
}
