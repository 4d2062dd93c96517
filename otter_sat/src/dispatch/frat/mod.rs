//! An intermediate structure supporting transcription of dispatches into FRAT proof steps.

#[doc(hidden)]
pub mod transcriber;

use std::{collections::VecDeque, fs::File};

use crate::db::ClauseKey;

/// An intermediate struct to support transforming dispatches from a context into steps of an FRAT proof.
pub struct Transcriber {
    /// The file to which steps of the proof are written.
    file: File,

    /// A buffer of clause keys accumulated for the resolution step currently being recorded.
    resolution_buffer: Vec<ClauseKey>,

    /// A queue of resolution buffers, one per addition awaiting transcription.
    resolution_queue: VecDeque<Vec<ClauseKey>>,

    /// A buffer holding steps until they are written to the file.
    step_buffer: Vec<String>,
}
