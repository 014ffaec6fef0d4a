use ashtaka_base::{
    ALL_GRAHAS, AshtakaBody, Body, BodyLongitude, GocharaConfig, NatalChart, ResolvedLongitudes,
    TransitSnapshot, calculate_ashtakavarga, compute_bav, compute_sav, score_transits, sign_index,
};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn natal() -> NatalChart {
    let lons = [151.6, 358.2, 168.0, 160.0, 71.4, 181.4, 126.0, 131.0, 311.0];
    let mut resolved = ResolvedLongitudes::new().with(Body::Lagna, BodyLongitude::new(324.8));
    for (g, lon) in ALL_GRAHAS.iter().zip(lons) {
        resolved.insert(Body::Graha(*g), BodyLongitude::new(lon));
    }
    match NatalChart::from_longitudes(&resolved) {
        Ok(chart) => chart,
        Err(e) => panic!("bench fixture: {e}"),
    }
}

fn transit() -> TransitSnapshot {
    let lons = [45.2, 210.7, 300.1, 30.5, 48.9, 355.0, 330.4, 352.0, 172.0];
    let resolved: ResolvedLongitudes = ALL_GRAHAS
        .iter()
        .zip(lons)
        .map(|(g, lon)| (Body::Graha(*g), BodyLongitude::with_speed(lon, 0.5)))
        .collect();
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default();
    match TransitSnapshot::from_longitudes(date, &resolved) {
        Ok(snap) => snap,
        Err(e) => panic!("bench fixture: {e}"),
    }
}

fn mapper_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_mapper");
    group.bench_function("sign_index", |b| b.iter(|| sign_index(black_box(123.456))));
    group.finish();
}

fn ashtakavarga_bench(c: &mut Criterion) {
    let chart = natal();

    let mut group = c.benchmark_group("ashtakavarga");
    group.bench_function("bav_single", |b| {
        b.iter(|| compute_bav(AshtakaBody::Guru, black_box(&chart)))
    });
    group.bench_function("sav", |b| b.iter(|| compute_sav(black_box(&chart))));
    group.bench_function("full_with_sodhana", |b| {
        b.iter(|| calculate_ashtakavarga(black_box(&chart)))
    });
    group.finish();
}

fn gochara_bench(c: &mut Criterion) {
    let chart = natal();
    let snap = transit();
    let cfg = GocharaConfig::default();

    let mut group = c.benchmark_group("gochara");
    group.bench_function("score_transits", |b| {
        b.iter(|| score_transits(black_box(&chart), black_box(&snap), &cfg))
    });
    group.finish();
}

criterion_group!(benches, mapper_bench, ashtakavarga_bench, gochara_bench);
criterion_main!(benches);
