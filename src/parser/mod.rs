//! Job file parser module.

mod job;

pub use job::{
    parse_job_file, parse_job_str, BoardLengthsFt, Job, JobRecord, OpeningRecord, SettingsRecord,
};
