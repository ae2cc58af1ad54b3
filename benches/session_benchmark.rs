use criterion::{Criterion, black_box, criterion_group, criterion_main};
use takt::{GameSession, HitJudge, JudgeConfig, NoteScheduler, TrackDefinition};

fn dense_track(notes: usize) -> TrackDefinition {
    TrackDefinition::from_times((0..notes).map(|i| i as f64 * 0.05))
}

fn scheduler_benchmark(c: &mut Criterion) {
    c.bench_function("scheduler_advance_10k", |b| {
        let track = dense_track(10_000);
        b.iter(|| {
            let mut scheduler = NoteScheduler::new(&track, 1.0);
            let mut t = 0.0;
            while !scheduler.is_exhausted() {
                t += 1.0 / 60.0;
                black_box(scheduler.advance_to(t));
            }
        });
    });
}

fn judge_benchmark(c: &mut Criterion) {
    c.bench_function("judge_against_active_set", |b| {
        let judge = HitJudge::new(JudgeConfig::normal());
        b.iter(|| {
            let mut active = takt::ActiveNoteSet::new();
            for i in 0..16 {
                active.spawn(
                    takt::NoteSpec {
                        target_time: i as f64 * 0.05,
                    },
                    0.0,
                    0.15,
                );
            }
            // Drain the set nearest-first.
            for i in 0..16 {
                black_box(judge.judge(&mut active, i as f64 * 0.05));
            }
        });
    });
}

fn full_session_benchmark(c: &mut Criterion) {
    c.bench_function("full_session_1k_notes_60fps", |b| {
        let track = dense_track(1_000);
        b.iter(|| {
            let mut session = GameSession::new();
            session
                .start(&track, JudgeConfig::normal(), |p| {
                    black_box(p);
                })
                .unwrap();

            let dt = 1.0 / 60.0;
            let mut elapsed: f64 = 0.0;
            while session.is_active() {
                // Hit every note that falls inside this frame.
                let next = elapsed + dt;
                let mut target = (elapsed / 0.05).ceil() * 0.05;
                while target < next {
                    let _ = session.input(target);
                    target += 0.05;
                }
                session.tick(dt, &(|| false)).unwrap();
                elapsed = next;
            }
        });
    });
}

criterion_group!(
    benches,
    scheduler_benchmark,
    judge_benchmark,
    full_session_benchmark
);
criterion_main!(benches);
