//! Characterizes the bundled first-order IIR filter in both of its forms and
//! prints the summary numbers: settling value, 63% rise time, and the
//! magnitude/phase point nearest the cutoff.

use bode_rs::analysis::frequency_response::{default_frequencies, sweep};
use bode_rs::analysis::step_response::step_response;
use bode_rs::filter::iir::{coefficient, FirstOrderIir};
use bode_rs::filter::{FilterConfig, FilterKind};

fn characterize(config: &FilterConfig) {
    println!(
        "==== {:?} filter, fc = {} Hz, Ts = {} s ====",
        config.kind, config.cutoff_hz, config.sample_period
    );
    println!(
        "coefficient a: {:.6}",
        coefficient(config.sample_period, config.cutoff_hz)
    );

    let step = step_response::<FirstOrderIir>(config, 0.01)
        .expect("step response analysis failed");
    println!("steady-state value: {:.4}", step.steady_state);
    match step.rise_time {
        Some(t) => println!("rise time (63%): {:.2} ms", t * 1000.0),
        None => println!("rise time (63%): never crossed"),
    }

    let response = sweep::<FirstOrderIir>(config, &default_frequencies())
        .expect("frequency sweep failed");
    println!(
        "measured {} frequencies, skipped {}",
        response.points.len(),
        response.skipped.len()
    );
    let nearest = response
        .points
        .iter()
        .min_by(|a, b| {
            let da = (a.frequency - config.cutoff_hz).abs();
            let db = (b.frequency - config.cutoff_hz).abs();
            da.partial_cmp(&db).unwrap()
        })
        .expect("sweep produced no points");
    println!(
        "nearest point to fc: {:.1} Hz -> {:.2} dB, {:.1} deg",
        nearest.frequency, nearest.magnitude_db, nearest.phase_deg
    );
    println!();
}

fn main() {
    let configs = [
        FilterConfig {
            cutoff_hz: 1000.0,
            sample_period: 1e-4,
            kind: FilterKind::Lowpass,
        },
        FilterConfig {
            cutoff_hz: 1000.0,
            sample_period: 1e-4,
            kind: FilterKind::Highpass,
        },
    ];
    for config in &configs {
        characterize(config);
    }
}
