//! Command dispatch performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use termfolio::vfs::ROOT;
use termfolio::{Interpreter, ParsedCommand, VirtualFs};

fn parse(c: &mut Criterion) {
    c.bench_function("parse_simple", |b| {
        b.iter(|| ParsedCommand::parse(black_box("pwd")));
    });

    c.bench_function("parse_flags_and_arg", |b| {
        b.iter(|| ParsedCommand::parse(black_box("ls -la projects/config-pusher")));
    });
}

fn resolve(c: &mut Criterion) {
    let fs = VirtualFs::portfolio();

    c.bench_function("resolve_nested", |b| {
        b.iter(|| fs.resolve(black_box("about/whoami.txt"), ROOT));
    });

    c.bench_function("list_root", |b| {
        b.iter(|| fs.list(black_box(ROOT)));
    });
}

// Scrollback and history grow per command, so each sample gets a fresh
// interpreter via iter_batched.
fn execute(c: &mut Criterion) {
    for (name, command) in [
        ("execute_pwd", "pwd"),
        ("execute_ls_long", "ls -l"),
        ("execute_unknown_with_suggestion", "opne about"),
    ] {
        c.bench_function(name, |b| {
            b.iter_batched(
                Interpreter::portfolio,
                |mut interp| interp.execute(black_box(command)),
                BatchSize::SmallInput,
            );
        });
    }
}

fn completion(c: &mut Criterion) {
    let interp = Interpreter::portfolio();

    c.bench_function("complete_verb_prefix", |b| {
        b.iter(|| interp.complete_input(black_box("c")));
    });

    c.bench_function("complete_path_prefix", |b| {
        b.iter(|| interp.complete_input(black_box("cat about/wh")));
    });
}

criterion_group!(benches, parse, resolve, execute, completion);
criterion_main!(benches);
