pub mod free_time;
