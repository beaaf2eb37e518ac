//! 値変換のベンチマーク
//!
//! 取得結果の文字列化と、書き込み前のテキスト化のスループットを測定します。
//!
//! 実装するベンチマーク:
//! - 型付き行列 → 文字列行列（`to_strings`）
//! - 文字列行列 → 型付き行列（`to_loose`）
//! - 行挿入の一括更新命令の構築（`insert_rows_batch`）

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gsheetzero::{insert_rows_batch, to_loose, to_strings, CellValue};

/// 数値・文字列・論理値・空セルが混在する行列を生成
fn mixed_matrix(rows: usize, cols: usize) -> Vec<Vec<CellValue>> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| match (r + c) % 4 {
                    0 => CellValue::Number(r as f64 * 1.25 + c as f64),
                    1 => CellValue::Text(format!("cell-{}-{}", r, c)),
                    2 => CellValue::Bool(r % 2 == 0),
                    _ => CellValue::Empty,
                })
                .collect()
        })
        .collect()
}

fn benchmark_to_strings(c: &mut Criterion) {
    let matrix = mixed_matrix(1_000, 26);

    let mut group = c.benchmark_group("coercion");
    group.throughput(Throughput::Elements((1_000 * 26) as u64));
    group.bench_function("to_strings_1000x26", |b| {
        b.iter(|| to_strings(black_box(&matrix)))
    });

    let strings = to_strings(&matrix);
    group.bench_function("to_loose_1000x26", |b| {
        b.iter(|| to_loose(black_box(&strings)))
    });
    group.finish();
}

fn benchmark_insert_rows_batch(c: &mut Criterion) {
    let rows = to_strings(&mixed_matrix(500, 10));

    c.bench_function("insert_rows_batch_500x10", |b| {
        b.iter(|| insert_rows_batch(black_box(0), black_box(1), black_box(&rows)))
    });
}

criterion_group!(benches, benchmark_to_strings, benchmark_insert_rows_batch);
criterion_main!(benches);
