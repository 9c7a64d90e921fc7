use clap::Parser;
use serde::Serialize;
use wavesim::{intensity, search_periods, Candidate};

// Steps a short analysis window through a WAV file and reports the ranked
// pitch-period candidates and intensity of each window, one line per hop,
// as plain text or JSON lines.

#[derive(Parser, Debug)]
#[clap(about = "Scan a mono 16-bit WAV file for pitch periods", version)]
struct Args {
    #[clap(value_parser, help = "Path to the WAV file to analyze")]
    wav_path: String,

    #[clap(
        long,
        default_value_t = 70.0,
        help = "Lowest pitch to search for, in Hz"
    )]
    min_pitch: f64,

    #[clap(
        long,
        default_value_t = 400.0,
        help = "Highest pitch to search for, in Hz"
    )]
    max_pitch: f64,

    #[clap(
        long,
        default_value_t = 0.75,
        help = "Minimum profile score for a reported candidate"
    )]
    threshold: f64,

    #[clap(
        long,
        default_value_t = 4,
        help = "Candidates to keep per analysis window"
    )]
    candidates: usize,

    #[clap(long, help = "Emit one JSON object per analysis window")]
    json: bool,
}

#[derive(Serialize)]
struct Record {
    time_s: f64,
    intensity: f64,
    candidates: Vec<Candidate>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut reader = hound::WavReader::open(&args.wav_path)?;
    let spec = reader.spec();
    if spec.channels != 1 || spec.bits_per_sample != 16 {
        return Err(format!(
            "expected mono 16-bit PCM, got {} channels at {} bits",
            spec.channels, spec.bits_per_sample
        )
        .into());
    }
    let samples: Vec<i16> = reader.samples::<i16>().collect::<Result<_, _>>()?;
    let rate = f64::from(spec.sample_rate);

    // Period bounds in samples; the highest pitch maps to the shortest period.
    let min_period = ((rate / args.max_pitch) as usize).max(1);
    let max_period = ((rate / args.min_pitch) as usize).max(min_period);
    let window_len = 2 * max_period;
    let hop = (min_period / 2).max(1);

    log::info!(
        "{}: {} samples at {} Hz, searching periods {}..={} with hop {}",
        args.wav_path,
        samples.len(),
        spec.sample_rate,
        min_period,
        max_period,
        hop
    );

    let mut start = 0;
    while start + window_len <= samples.len() {
        let window = &samples[start..start + window_len];
        let candidates =
            search_periods(window, min_period, max_period, args.threshold, args.candidates)?;
        let record = Record {
            time_s: start as f64 / rate,
            intensity: intensity(window),
            candidates,
        };
        if args.json {
            println!("{}", serde_json::to_string(&record)?);
        } else {
            print!("{:8.3}  intensity {:.3}", record.time_s, record.intensity);
            match record.candidates.first() {
                Some(best) => println!(
                    "  pitch {:6.1} Hz  score {:.3}",
                    rate / best.period as f64,
                    best.score
                ),
                None => println!("  unvoiced"),
            }
        }
        start += hop;
    }
    Ok(())
}
