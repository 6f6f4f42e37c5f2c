pub mod ghost_jobs;
pub mod intake;
