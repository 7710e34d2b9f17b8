// sizer-cli/src/commands/mod.rs

pub mod report;
