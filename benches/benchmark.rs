//! path-notation benchmark

use bencher::{benchmark_group, benchmark_main, black_box, Bencher};
use path_notation::{format_keys, tokenize, Key, KeyPath, PathArg};

const DOTTED: &str = "store.book.author.name.first";
const MIXED: &str = r"store.book[12][title.main].tags[3].notes\.draft[a\]b]";

fn bench_tokenize_dotted(bench: &mut Bencher) {
    bench.iter(|| {
        black_box(tokenize(black_box(DOTTED)).count());
    })
}

fn bench_tokenize_mixed(bench: &mut Bencher) {
    bench.iter(|| {
        black_box(tokenize(black_box(MIXED)).count());
    })
}

fn bench_format_dotted(bench: &mut Bencher) {
    let keys: Vec<Key> = tokenize(DOTTED).collect();
    bench.iter(|| {
        black_box(format_keys(black_box(&keys)));
    })
}

fn bench_format_mixed(bench: &mut Bencher) {
    let keys: Vec<Key> = tokenize(MIXED).collect();
    bench.iter(|| {
        black_box(format_keys(black_box(&keys)));
    })
}

fn bench_from_args(bench: &mut Bencher) {
    let parent = KeyPath::from(DOTTED);
    bench.iter(|| {
        black_box(KeyPath::from_args([
            PathArg::from(&parent),
            PathArg::from(3),
            PathArg::from("title[main]"),
        ]));
    })
}

fn bench_slice(bench: &mut Bencher) {
    let path = KeyPath::from(MIXED);
    bench.iter(|| {
        black_box(path.slice(1, Some(-1)));
    })
}

benchmark_group!(
    path_notation_benches,
    bench_tokenize_dotted,
    bench_tokenize_mixed,
    bench_format_dotted,
    bench_format_mixed,
    bench_from_args,
    bench_slice,
);
benchmark_main!(path_notation_benches);
