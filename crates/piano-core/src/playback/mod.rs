mod dispatch;
mod player;
mod schedule;

pub use {
    dispatch::NoteDispatch,
    player::{PlaybackId, Player},
    schedule::{PlaybackSchedule, ScheduledNote},
};
