use criterion::{black_box, criterion_group, criterion_main, Criterion};
use truth_or_dare::bank::{Category, ChallengeBank, Difficulty, Mode};
use truth_or_dare::challenge::{ChallengeSelector, PlayerHistory};
use truth_or_dare::core::GameRng;

fn bank(size: usize) -> ChallengeBank {
    let items: Vec<String> = (0..size).map(|i| format!("Dare number {i} for 30 secondes")).collect();
    ChallengeBank::new().with_pool(Mode::Friends, Category::Dare, Difficulty::Soft, items)
}

fn bench_select_for(c: &mut Criterion) {
    let bank = bank(200);
    let selector = ChallengeSelector::default();

    c.bench_function("select_for_drain_200", |b| {
        b.iter(|| {
            let mut history = PlayerHistory::new();
            let mut rng = GameRng::new(42);
            for _ in 0..200 {
                let challenge = selector
                    .select_for(&bank, Mode::Friends, Difficulty::Soft, Category::Dare, "Ana", &mut history, &mut rng)
                    .unwrap();
                black_box(challenge);
            }
        })
    });

    c.bench_function("history_clone_200", |b| {
        let mut history = PlayerHistory::new();
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            selector
                .select_for(&bank, Mode::Friends, Difficulty::Soft, Category::Dare, "Ana", &mut history, &mut rng)
                .unwrap();
        }
        b.iter(|| black_box(history.clone()))
    });
}

criterion_group!(benches, bench_select_for);
criterion_main!(benches);
