//! String Joining Strategies
//!
//! Compares ways of joining strings with a separator, first on five short
//! strings and then on five thousand. Every strategy must produce exactly the
//! same output as `[String]::join` before it is timed.
//!
//! Results are scaled so every test shows the same iteration count, and
//! scores are relative to the fastest strategy.
//!
//! Run with: cargo run --example string_join -p minibench-demos --release

use minibench::prelude::*;

fn main() -> anyhow::Result<()> {
    let mut harness = Harness::from_env()?;

    let small: Vec<String> = ["a", "b", "c", "d", "e"].map(String::from).to_vec();
    benchmark_string_join(&mut harness, &small)?;

    let big: Vec<String> = (0..5000).map(|i| i.to_string()).collect();
    benchmark_string_join(&mut harness, &big)?;

    harness.finish()
}

fn benchmark_string_join(harness: &mut Harness, data: &[String]) -> anyhow::Result<()> {
    let expected = data.join(" ");
    let capacity = expected.len() + 2;

    let suite = TestSuite::new(format!("Joining strings - with {} strings", data.len()))
        .plus(|input: &[String]| input.join(" "), "join")
        .plus_fn(looping_with_builder)
        .plus(
            move |input: &[String]| looping_with_builder_with_capacity(input, capacity),
            "looping_with_builder_with_capacity",
        )
        .plus_fn(looping_with_initial_value)
        .plus(
            move |input: &[String]| looping_with_initial_value_and_capacity(input, capacity),
            "looping_with_initial_value_and_capacity",
        )
        .plus_fn(looping_with_concatenation)
        .plus_fn(looping_with_concat)
        .plus_fn(looping_with_format);

    harness.run_suite(&suite, data, &expected)?;
    Ok(())
}

fn looping_with_builder(input: &[String]) -> String {
    let mut builder = String::new();
    push_separated(&mut builder, input);
    builder
}

fn looping_with_builder_with_capacity(input: &[String], capacity: usize) -> String {
    let mut builder = String::with_capacity(capacity);
    push_separated(&mut builder, input);
    builder
}

fn looping_with_initial_value(input: &[String]) -> String {
    let Some((first, rest)) = input.split_first() else {
        return String::new();
    };
    let mut builder = first.clone();
    for s in rest {
        builder.push(' ');
        builder.push_str(s);
    }
    builder
}

fn looping_with_initial_value_and_capacity(input: &[String], capacity: usize) -> String {
    let Some((first, rest)) = input.split_first() else {
        return String::new();
    };
    let mut builder = String::with_capacity(capacity);
    builder.push_str(first);
    for s in rest {
        builder.push(' ');
        builder.push_str(s);
    }
    builder
}

fn looping_with_concatenation(input: &[String]) -> String {
    let Some((first, rest)) = input.split_first() else {
        return String::new();
    };
    let mut ret = first.clone();
    for s in rest {
        ret = ret + " " + s;
    }
    ret
}

fn looping_with_concat(input: &[String]) -> String {
    let Some((first, rest)) = input.split_first() else {
        return String::new();
    };
    let mut ret = first.clone();
    for s in rest {
        // A fresh string per step
        ret = [ret.as_str(), " ", s.as_str()].concat();
    }
    ret
}

fn looping_with_format(input: &[String]) -> String {
    let Some((first, rest)) = input.split_first() else {
        return String::new();
    };
    let mut ret = first.clone();
    for s in rest {
        ret = format!("{} {}", ret, s);
    }
    ret
}

fn push_separated(builder: &mut String, input: &[String]) {
    for (i, s) in input.iter().enumerate() {
        if i > 0 {
            builder.push(' ');
        }
        builder.push_str(s);
    }
}
