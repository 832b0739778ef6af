use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use primarray_core::array::{ByteArray, LongArray};

fn get_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_range");
    for len in [64_i32, 4096, 1 << 20] {
        let array = LongArray::new(len).unwrap();
        let mut out = vec![0_i64; len as usize];

        group.bench_with_input(BenchmarkId::new("checked", len), &len, |b, &len| {
            b.iter(|| array.get_range(black_box(&mut out), 0, len).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("slice_copy", len), &len, |b, _| {
            b.iter(|| black_box(&mut out[..]).copy_from_slice(array.as_slice()))
        });
    }
    group.finish();
}

fn set_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_range");
    for len in [64_i32, 4096, 1 << 20] {
        let mut array = ByteArray::new(len).unwrap();
        let src = vec![7_i8; len as usize];

        group.bench_with_input(BenchmarkId::new("checked", len), &len, |b, &len| {
            b.iter(|| array.set_range(black_box(&src), 0, len).unwrap())
        });
    }
    group.finish();
}

fn element_access(c: &mut Criterion) {
    let mut array = LongArray::new(1024).unwrap();
    c.bench_function("get_set_1024", |b| {
        b.iter(|| {
            for i in 0..1024 {
                let v = array.get(i).unwrap();
                array.set(i, v + 1).unwrap();
            }
        })
    });
}

criterion_group!(benches, get_range, set_range, element_access);
criterion_main!(benches);
