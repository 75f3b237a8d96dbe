use std::hint::black_box;

use divan::Bencher;
use text_similarity::similarity;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

const ORIGINAL: &str = "今天是星期天，天气晴，今天晚上我要去看电影。";
const COMPARED: &str = "今天是周天，天气晴朗，我晚上要去看电影。";

fn repeated(text: &str, times: usize) -> String {
    text.repeat(times)
}

#[divan::bench(min_time = 10)]
fn sentence(bencher: Bencher) {
    bencher.bench_local(move || {
        black_box(similarity(black_box(ORIGINAL), black_box(COMPARED)));
    });
}

#[divan::bench(min_time = 10)]
fn text_1k_chars(bencher: Bencher) {
    let original = repeated(ORIGINAL, 45);
    let compared = repeated(COMPARED, 50);

    bencher.bench_local(move || {
        black_box(similarity(black_box(&original), black_box(&compared)));
    });
}

#[divan::bench(min_time = 60)]
fn text_10k_chars(bencher: Bencher) {
    let original = repeated(ORIGINAL, 450);
    let compared = repeated(COMPARED, 500);

    bencher.bench_local(move || {
        black_box(similarity(black_box(&original), black_box(&compared)));
    });
}
