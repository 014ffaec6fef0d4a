use ashtaka_base::{
    ALL_GRAHAS, AyanamshaSystem, Body, BodyLongitude, GocharaConfig, ResolvedLongitudes,
};
use ashtaka_search::{
    BirthData, GeoLocation, LongitudeResolver, ResolveError, ScanConfig, auspicious_dates,
};
use chrono::{Datelike, NaiveDateTime};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Same sky for every instant, advanced by day of year.
struct Drifting;

impl LongitudeResolver for Drifting {
    fn ayanamsha(&self) -> AyanamshaSystem {
        AyanamshaSystem::Lahiri
    }

    fn resolve(
        &self,
        utc: NaiveDateTime,
        _location: GeoLocation,
    ) -> Result<ResolvedLongitudes, ResolveError> {
        let day = f64::from(utc.ordinal());
        let mut lons: ResolvedLongitudes = ALL_GRAHAS
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let lon = (i as f64 * 41.0 + day * 0.9).rem_euclid(360.0);
                (Body::Graha(*g), BodyLongitude::with_speed(lon, 0.9))
            })
            .collect();
        lons.insert(Body::Lagna, BodyLongitude::new(324.8));
        Ok(lons)
    }
}

fn scan_bench(c: &mut Criterion) {
    let birth = match BirthData::parse("1978-09-18", "17:35", 13.0827, 80.2707, 5.5) {
        Ok(b) => b,
        Err(e) => panic!("bench fixture: {e}"),
    };
    let sav = [27, 26, 32, 33, 32, 34, 23, 21, 22, 30, 29, 28];
    let gochara = GocharaConfig::default();
    let scan = ScanConfig::default();

    let mut group = c.benchmark_group("muhurta");
    group.sample_size(20);
    group.bench_function("auspicious_dates_month", |b| {
        b.iter(|| {
            auspicious_dates(
                black_box(&Drifting),
                &birth,
                2025,
                1,
                Some(&sav),
                &gochara,
                &scan,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, scan_bench);
criterion_main!(benches);
