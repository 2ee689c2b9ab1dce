//! Subcommand execution. Each command renders its report into a `String`.

use std::cell::Cell;
use std::fmt::Write;
use std::iter;
use std::rc::Rc;

use anyhow::{Context, Result};
use keel_config::KeelConfig;
use keel_core::{BoundedBuffer, Capacity, Scope, TypeRegistry};
use keel_types::{Interval, cover};

use crate::cli::{Command, IntervalAction};

pub fn run(command: &Command, config: &KeelConfig) -> Result<String> {
    match command {
        Command::Interval { action } => interval(action),
        Command::Buffer { capacity, values } => buffer(*capacity, values, config),
        Command::Registry => registry(),
    }
}

fn interval_from(low: i64, high: i64) -> Result<Interval<i64>> {
    Interval::new(low, high).with_context(|| format!("invalid interval [{low}, {high}]"))
}

fn interval(action: &IntervalAction) -> Result<String> {
    let line = match *action {
        IntervalAction::Contains { low, high, value } => {
            let range = interval_from(low, high)?;
            format!("{range} contains {value}: {}", range.contains(&value))
        }
        IntervalAction::Intersect {
            low,
            high,
            other_low,
            other_high,
        } => {
            let a = interval_from(low, high)?;
            let b = interval_from(other_low, other_high)?;
            let common = a
                .intersect(&b)
                .with_context(|| format!("cannot intersect {a} and {b}"))?;
            format!("intersection of {a} and {b}: {common}")
        }
        IntervalAction::Span {
            low,
            high,
            other_low,
            other_high,
        } => {
            let a = interval_from(low, high)?;
            let b = interval_from(other_low, other_high)?;
            format!("span of {a} and {b}: {}", a.span(&b))
        }
        IntervalAction::Clamp { low, high, value } => {
            let range = interval_from(low, high)?;
            format!("{value} clamped to {range}: {}", range.clamp(value))
        }
        IntervalAction::Cover { ref values } => {
            let covered = cover(values.iter().copied()).context("cannot cover values")?;
            format!("cover of {values:?}: {covered}")
        }
    };
    Ok(format!("{line}\n"))
}

fn buffer(capacity: Option<usize>, values: &[i64], config: &KeelConfig) -> Result<String> {
    let capacity = capacity
        .map_or_else(|| config.buffer_capacity(), Capacity::new)
        .context("invalid buffer capacity")?;
    let mut buffer = BoundedBuffer::with_capacity(capacity);
    let mut out = String::new();

    let accepted = buffer.insert_all(values.iter().copied());
    writeln!(
        out,
        "capacity {}: accepted {accepted} of {}",
        buffer.capacity(),
        values.len()
    )?;

    // The sink is wider than the buffer: i64 values land in an i128 vec.
    let mut evens: Vec<i128> = Vec::new();
    let moved = buffer.drain_to(&mut evens, |value| value % 2 == 0);
    writeln!(out, "drained {moved} even: {evens:?}")?;

    let residue: Vec<i64> = iter::from_fn(|| buffer.remove()).collect();
    writeln!(out, "residue: {residue:?}")?;
    Ok(out)
}

struct Greeting(String);

struct Ticket(u32);

fn counted<T>(
    calls: &Rc<Cell<u32>>,
    make: impl Fn(u32) -> T + 'static,
) -> impl Fn() -> T + 'static {
    let calls = Rc::clone(calls);
    move || {
        calls.set(calls.get() + 1);
        make(calls.get())
    }
}

fn registry() -> Result<String> {
    let mut out = String::new();
    let greeting_calls = Rc::new(Cell::new(0));
    let ticket_calls = Rc::new(Cell::new(0));

    let mut root = TypeRegistry::new();
    root.bind(
        Scope::Cached,
        counted(&greeting_calls, |_| Greeting("hello from root".to_string())),
    )?;
    root.bind(Scope::Transient, counted(&ticket_calls, Ticket))?;
    writeln!(
        out,
        "root: bound Greeting ({}), Ticket ({})",
        Scope::Cached,
        Scope::Transient
    )?;

    for _ in 0..3 {
        let ticket = root.resolve::<Ticket>()?;
        writeln!(out, "root: Ticket #{}", ticket.0)?;
    }

    let first = root.resolve::<Greeting>()?;
    let second = root.resolve::<Greeting>()?;
    writeln!(
        out,
        "root: Greeting {:?}, same instance: {}, factory calls: {}",
        first.0,
        Rc::ptr_eq(&first, &second),
        greeting_calls.get()
    )?;

    let mut child = root.child();
    child.bind(Scope::Cached, || Greeting("hello from child".to_string()))?;
    writeln!(out, "child: bound Greeting ({})", Scope::Cached)?;
    writeln!(out, "child: Greeting {:?}", child.resolve::<Greeting>()?.0)?;
    writeln!(
        out,
        "child: Ticket #{} (from root)",
        child.resolve::<Ticket>()?.0
    )?;

    if let Err(err) = child.bind(Scope::Transient, || Greeting(String::new())) {
        writeln!(out, "child: rebind refused: {err}")?;
    }

    let grandchild = child.child();
    writeln!(
        out,
        "grandchild (depth {}): Greeting {:?}, Ticket #{}",
        grandchild.depth(),
        grandchild.resolve::<Greeting>()?.0,
        grandchild.resolve::<Ticket>()?.0
    )?;
    writeln!(out, "root: Greeting still {:?}", root.resolve::<Greeting>()?.0)?;
    Ok(out)
}
