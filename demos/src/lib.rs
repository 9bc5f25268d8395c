//! MiniBench Demos
//!
//! Runnable demonstrations of MiniBench. This crate is not published; it
//! exists solely to host examples that depend on `minibench`.
//!
//! Run any example with:
//! ```sh
//! cargo run --example <name> -p minibench-demos --release
//! ```
//!
//! | Example | Shows |
//! |---------|-------|
//! | `string_join` | The harness: string joining strategies on a small and a big data set |
//! | `direct_api` | Running, scaling and displaying a suite without the harness |
//!
//! Both accept `/calibration-time:<secs>` and `/test-time:<secs>` to shorten runs:
//! ```sh
//! cargo run --example string_join -p minibench-demos --release -- /calibration-time:0.2 /test-time:1
//! ```
