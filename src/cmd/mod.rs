//! Command-line subcommands other than the main polling loop.

pub mod dry_run;

pub use dry_run::DryRunArgs;
