pub mod common;

pub mod err;

pub mod milestones;

pub mod projects;
