//! `ashtaka` - Ashtakavarga and Gochara from the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use ashtaka_base::rashi::rashi_from_longitude;
use ashtaka_base::{
    AshtakaBody, AshtakavargaResult, ChartError, GocharaReport, NatalChart, PlanetConnection,
    Rashi, calculate_ashtakavarga, compute_prastara, house_of, sign_of_house,
};
use ashtaka_config::Settings;
use ashtaka_search::{
    AuspiciousDates, BirthData, EphemerisTable, ScanConfig, auspicious_dates,
    connections_for_birth, gochara_for_date, natal_chart_for_birth,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "ashtaka", version, about = "Ashtakavarga and Gochara CLI")]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

/// Birth data plus the table its longitudes come from.
#[derive(Args)]
struct BirthArgs {
    /// Date of birth (YYYY-MM-DD or DD-MM-YYYY)
    #[arg(long)]
    dob: String,
    /// Local time of birth (HH:MM or HH:MM:SS)
    #[arg(long)]
    tob: String,
    /// Latitude in degrees (north positive)
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude in degrees (east positive)
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,
    /// UTC offset in hours
    #[arg(long, default_value = "5.5", allow_negative_numbers = true)]
    tz: f64,
    /// Ephemeris table (JSON); defaults to `ephemeris` in the settings file
    #[arg(long)]
    ephemeris: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// House of a sign counted from the ascendant sign
    House {
        /// Sign index (1-12)
        #[arg(long)]
        sign: u8,
        /// Ascendant sign index (1-12)
        #[arg(long)]
        ascendant: u8,
    },
    /// Ashtakavarga from sign placements alone
    CalculateAshtakavarga {
        /// Comma-separated sign indices for Sun,Moon,Mars,Mercury,Jupiter,Venus,Saturn (1-12)
        #[arg(long)]
        graha_signs: String,
        /// Lagna sign index (1-12)
        #[arg(long)]
        lagna_sign: u8,
    },
    /// Ashtakavarga for a birth
    Ashtakavarga {
        #[command(flatten)]
        birth: BirthArgs,
        /// Also print the contribution matrix for this body (sun..saturn, lagna)
        #[arg(long)]
        prastara: Option<String>,
    },
    /// Gochara (transit) scores for a birth on a date
    Gochara {
        #[command(flatten)]
        birth: BirthArgs,
        /// Evaluation date (YYYY-MM-DD); defaults to today (UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Rank the dates of a month by transit favourability
    AuspiciousDates {
        #[command(flatten)]
        birth: BirthArgs,
        /// Month to scan (YYYY-MM)
        #[arg(long)]
        month: String,
        /// Number of best dates (overrides the settings file)
        #[arg(long)]
        top_n: Option<usize>,
        /// Adjust scores by the natal SAV of transited houses
        #[arg(long)]
        with_sav: bool,
    },
    /// Natal planet connections for a birth
    Connections {
        #[command(flatten)]
        birth: BirthArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose > 0 { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let settings = Settings::load_or_default(cli.config.as_deref())
        .context("loading settings")?;
    run(cli.command, &settings, cli.json)
}

fn run(command: Commands, settings: &Settings, json: bool) -> anyhow::Result<()> {
    match command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            emit(json, &info, || {
                let dms = info.dms;
                println!(
                    "{} ({}) - sign {} - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    info.sign_index,
                    dms.degrees,
                    dms.minutes,
                    dms.seconds,
                    info.degrees_in_rashi
                );
            })
        }

        Commands::House { sign, ascendant } => {
            check_sign(sign)?;
            check_sign(ascendant)?;
            let house = house_of(sign, ascendant);
            emit(json, &serde_json::json!({ "sign": sign, "ascendant": ascendant, "house": house }), || {
                println!("House {house} (sign {sign} from ascendant sign {ascendant})");
            })
        }

        Commands::CalculateAshtakavarga {
            graha_signs,
            lagna_sign,
        } => {
            let signs = parse_graha_signs(&graha_signs)?;
            let chart = NatalChart::from_signs(&signs, lagna_sign)?;
            let result = calculate_ashtakavarga(&chart);
            emit(json, &result, || print_ashtakavarga(&result))
        }

        Commands::Ashtakavarga { birth, prastara } => {
            let (table, birth) = load_birth(&birth, settings)?;
            let chart = natal_chart_for_birth(&table, &birth)?;
            let result = calculate_ashtakavarga(&chart);
            let matrix = match prastara {
                Some(name) => {
                    let body: AshtakaBody = name.parse()?;
                    Some(compute_prastara(body, &chart))
                }
                None => None,
            };
            if json {
                print_json(&serde_json::json!({ "ashtakavarga": result, "prastara": matrix }))
            } else {
                print_ashtakavarga(&result);
                if let Some(p) = matrix {
                    println!("\nPrastara for {}:", p.body);
                    for row in &p.rows {
                        println!("  {:9} {:?}", row.contributor.to_string(), row.house_marks);
                    }
                    println!("  {:9} {:?}", "Total", p.house_totals());
                }
                Ok(())
            }
        }

        Commands::Gochara { birth, date } => {
            let (table, birth) = load_birth(&birth, settings)?;
            let date = match date {
                Some(d) => parse_day(&d)?,
                None => chrono::Utc::now().date_naive(),
            };
            let report = gochara_for_date(&table, &birth, date, &settings.gochara)?;
            emit(json, &report, || print_gochara(&report))
        }

        Commands::AuspiciousDates {
            birth,
            month,
            top_n,
            with_sav,
        } => {
            let (table, birth) = load_birth(&birth, settings)?;
            let (year, month) = parse_month(&month)?;
            let scan = ScanConfig {
                top_n: top_n.unwrap_or(settings.scan.top_n),
                ..settings.scan
            };
            let sav = if with_sav {
                let chart = natal_chart_for_birth(&table, &birth)?;
                Some(calculate_ashtakavarga(&chart).sav.house_points)
            } else {
                None
            };
            let result = auspicious_dates(
                &table,
                &birth,
                year,
                month,
                sav.as_ref(),
                &settings.gochara,
                &scan,
            )?;
            emit(json, &result, || print_auspicious(&result))
        }

        Commands::Connections { birth } => {
            let (table, birth) = load_birth(&birth, settings)?;
            let conns = connections_for_birth(&table, &birth)?;
            emit(json, &conns, || print_connections(&conns))
        }
    }
}

// ---------------------------------------------------------------------------
// Input helpers
// ---------------------------------------------------------------------------

fn check_sign(sign: u8) -> Result<Rashi, ChartError> {
    Rashi::from_number(sign).ok_or(ChartError::InvalidSignIndex(sign))
}

fn parse_graha_signs(s: &str) -> anyhow::Result<[u8; 7]> {
    let vals = s
        .split(',')
        .map(|v| {
            v.trim()
                .parse::<u8>()
                .with_context(|| format!("invalid sign value '{v}'"))
        })
        .collect::<anyhow::Result<Vec<u8>>>()?;
    let arr: [u8; 7] = vals
        .as_slice()
        .try_into()
        .with_context(|| format!("expected 7 comma-separated sign indices, got {}", vals.len()))?;
    Ok(arr)
}

fn parse_day(s: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date '{s}' (expected YYYY-MM-DD)"))
}

fn parse_month(s: &str) -> anyhow::Result<(i32, u32)> {
    let (y, m) = s
        .trim()
        .split_once('-')
        .with_context(|| format!("invalid month '{s}' (expected YYYY-MM)"))?;
    let year = y.parse().with_context(|| format!("invalid year '{y}'"))?;
    let month = m.parse().with_context(|| format!("invalid month '{m}'"))?;
    Ok((year, month))
}

fn load_birth(args: &BirthArgs, settings: &Settings) -> anyhow::Result<(EphemerisTable, BirthData)> {
    let birth = BirthData::parse(&args.dob, &args.tob, args.lat, args.lon, args.tz)?;
    let path: &Path = match (&args.ephemeris, &settings.ephemeris) {
        (Some(p), _) | (None, Some(p)) => p,
        (None, None) => bail!("no ephemeris table: pass --ephemeris or set `ephemeris` in the settings file"),
    };
    let table = EphemerisTable::load(path)
        .with_context(|| format!("loading ephemeris table {}", path.display()))?;
    log::debug!("{}: {} instants", path.display(), table.len());
    Ok((table, birth))
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce()) -> anyhow::Result<()> {
    if json {
        print_json(value)
    } else {
        text();
        Ok(())
    }
}

fn sign_name(sign: u8) -> &'static str {
    Rashi::from_number(sign).map_or("?", Rashi::name)
}

fn print_ashtakavarga(result: &AshtakavargaResult) {
    let asc = result.sav.ascendant_sign;
    println!("Ascendant: {} (sign {asc})", sign_name(asc));
    println!("BAV (Bhinna Ashtakavarga), by house:");
    for bav in &result.bavs {
        println!(
            "  {:9} {:?} (total: {})",
            bav.body.to_string(),
            bav.house_points,
            bav.total()
        );
    }
    println!("\nSAV (Sarva Ashtakavarga):");
    println!("  Houses:      {:?} (total: {})", result.sav.house_points, result.sav.total());
    println!("  Trikona:     {:?}", result.sodhana.after_trikona);
    println!("  Ekadhipatya: {:?}", result.sodhana.after_ekadhipatya);
    println!("\nHouse strength:");
    for (i, strength) in result.sav.strengths().iter().enumerate() {
        let house = i as u8 + 1;
        println!(
            "  H{house:<2} {:11} {:2} {}",
            sign_name(sign_of_house(house, asc)),
            result.sav.house_points[i],
            strength.label()
        );
    }
}

fn print_gochara(report: &GocharaReport) {
    let o = &report.overall;
    println!(
        "Gochara {}: overall {:.1} ({}) - green {}, amber {}, red {}",
        report.date,
        o.average_score,
        o.rag.name(),
        o.green_count,
        o.amber_count,
        o.red_count
    );
    for t in &report.transits {
        println!(
            "  {:8} H{:<2} {:11} {:5.2} deg  {} p{} (lord {})  {:13} {}{:5.1} {}",
            t.body.to_string(),
            t.transit_house,
            sign_name(t.transit_sign),
            t.transit_degree,
            t.nakshatra.name(),
            t.pada,
            t.nakshatra_lord,
            t.dignity.label(),
            if t.retrograde { "R " } else { "  " },
            t.score,
            t.rag.name()
        );
    }
    println!("\nActivated houses:");
    for r in &report.house_rankings {
        let planets: Vec<String> = r.planets.iter().map(ToString::to_string).collect();
        println!(
            "  H{:<2} {:24} {:5.1} {:5}  {}",
            r.house,
            r.area,
            r.weighted_score,
            r.rag.name(),
            planets.join(", ")
        );
    }
}

fn print_auspicious(result: &AuspiciousDates) {
    println!(
        "{}-{:02}: {} dates analysed, {} skipped",
        result.year,
        result.month,
        result.analysed,
        result.skipped.len()
    );
    println!("Best dates:");
    for d in &result.top {
        println!("  {}  {:5.1} {:5}  {}", d.date, d.score, d.rag.name(), d.reasons.join("; "));
    }
}

fn print_connections(conns: &[PlanetConnection]) {
    for c in conns {
        println!(
            "{:8} H{:<2} {:11} {} p{} ({})  owns {:?}  aspects {:?}  connected {:?}",
            c.graha.to_string(),
            c.placed_house,
            sign_name(c.sign),
            c.nakshatra.name(),
            c.pada,
            c.dignity.label(),
            c.owns,
            c.aspects,
            c.connected_houses
        );
    }
}
