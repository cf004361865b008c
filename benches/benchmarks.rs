use std::io::Cursor;
use std::num::NonZeroUsize;

use bfi_interp::MachineBuilder;
use bfi_test_utils::NullWriter;
use bfi_types::Program;

use criterion::{criterion_group, criterion_main, Criterion};

// Two nested countdown loops, roughly 65k instructions end to end.
const LOOPY_PROGRAM: &str = "-[>-[-]<-]";

fn run_loopy_program(c: &mut Criterion) {
    c.bench_function("run_loopy_program", |b| {
        b.iter(|| {
            let program =
                Program::new(Cursor::new(LOOPY_PROGRAM)).expect("benchmark program parses");

            let mut machine = MachineBuilder::new()
                .program(program)
                .tape_length(NonZeroUsize::new(64).expect("nonzero"))
                .input(Cursor::new(Vec::new()))
                .output(NullWriter)
                .build()
                .expect("benchmark machine builds");

            machine.run().expect("benchmark program runs");
        });
    });
}

criterion_group!(benches, run_loopy_program);
criterion_main!(benches);
