//! Interactive plots of the heated pipe model.
//!
//! # Usage
//!
//! ```text
//! cargo run --example pipe_heating -- outlet
//! cargo run --example pipe_heating -- outlet 4.0
//! cargo run --example pipe_heating -- profile
//! cargo run --example pipe_heating -- water
//! ```
//!
//! # Modes
//!
//! - **outlet [dt]**: Heat the reference pipe from 300 K for 700 s and plot
//!   the inlet-side, middle and outlet node temperatures as the run
//!   progresses. The step defaults to 1 s and must stay below the stability
//!   limit (about 5.2 s).
//!
//! - **profile [dt]**: Run the same case and plot the final temperature
//!   along the pipe against the analytic steady-state line. The numerical
//!   profile sits half a node's temperature rise above it.
//!
//! - **water**: Sweep the water property splines across their sampled
//!   range, with water `cp` and density feeding the pipe's fluid properties.

use std::error::Error;

use pipe_heat_models::{
    models::thermal::pipe::{
        FluidProperties, HeatedPipe, HeatedPipeParameters, PipeTemperatures, SimulationConfig,
        SimulationEvent,
    },
    support::thermo::model::{TabulatedWater, WaterProperty},
};
use twine_observers::{PlotObserver, ShowConfig};
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    length::meter,
    thermodynamic_temperature::kelvin,
    time::second,
};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "outlet".into());
    match mode.as_str() {
        "outlet" => outlet(time_step_arg()),
        "profile" => profile(time_step_arg()),
        "water" => water(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: pipe_heating [outlet [dt]|profile [dt]|water]");
            std::process::exit(1);
        }
    }
}

fn time_step_arg() -> f64 {
    std::env::args()
        .nth(2)
        .as_deref()
        .map(str::parse::<f64>)
        .transpose()
        .unwrap_or_else(|_| {
            eprintln!("Invalid time step, expected seconds, e.g. 2.5");
            std::process::exit(1);
        })
        .unwrap_or(1.0)
}

fn config(dt: f64) -> SimulationConfig {
    SimulationConfig {
        time_step: Time::new::<second>(dt),
        ..SimulationConfig::default()
    }
}

fn cold_start(pipe: &HeatedPipe) -> PipeTemperatures {
    pipe.uniform_temperatures(ThermodynamicTemperature::new::<kelvin>(300.0))
}

/// Node temperatures over time, recorded live through the solver observer.
fn outlet(dt: f64) -> Result<(), Box<dyn Error>> {
    let pipe = HeatedPipe::new(HeatedPipeParameters::default())?;
    let middle = pipe.grid().len() / 2;

    let mut obs = PlotObserver::<3>::new(["First node", "Middle node", "Outlet"]);

    pipe.simulate(
        cold_start(&pipe),
        &config(dt),
        |event: &SimulationEvent| {
            let input = &event.snapshot.input;
            let t = input.temperatures.as_slice();
            obs.record(
                input.time.get::<second>(),
                [
                    t.first().map(|t| t.get::<kelvin>()),
                    t.get(middle).map(|t| t.get::<kelvin>()),
                    input.temperatures.outlet().map(|t| t.get::<kelvin>()),
                ],
            );
            None
        },
    )?;

    obs.show(
        ShowConfig::new()
            .title(format!("Heated pipe: node temperatures (dt={dt} s)"))
            .legend(),
    )?;

    Ok(())
}

/// Final field along the pipe against the analytic steady state.
fn profile(dt: f64) -> Result<(), Box<dyn Error>> {
    let pipe = HeatedPipe::new(HeatedPipeParameters::default())?;
    let simulation = pipe.simulate_unobserved(cold_start(&pipe), &config(dt))?;

    let Some(last) = simulation.history.last() else {
        return Ok(());
    };
    let deviation = pipe.deviation_from_steady_state(&last.input.temperatures)?;

    let mut obs = PlotObserver::<2>::new(["Euler at final time", "Analytic steady state"]);
    for ((x, t), t_ss) in pipe
        .node_positions()
        .iter()
        .zip(last.input.temperatures.as_slice())
        .zip(pipe.steady_state().as_slice())
    {
        obs.record(
            x.get::<meter>(),
            [Some(t.get::<kelvin>()), Some(t_ss.get::<kelvin>())],
        );
    }

    obs.show(
        ShowConfig::new()
            .title(format!(
                "Heated pipe at t={:.0} s: L2 deviation {:.2} K",
                last.input.time.get::<second>(),
                deviation.value,
            ))
            .legend(),
    )?;

    Ok(())
}

/// Water property splines, normalized to their value at the coldest sample.
fn water() -> Result<(), Box<dyn Error>> {
    let water = TabulatedWater::new()?;
    let Some((min, max)) = water.table().temperature_range() else {
        return Ok(());
    };

    let properties = [
        WaterProperty::Density,
        WaterProperty::Cp,
        WaterProperty::ThermalConductivity,
        WaterProperty::DynamicViscosity,
    ];
    let reference = properties.map(|p| water.table().value(p, min));

    let mut obs = PlotObserver::<4>::new(["Density", "cp", "Conductivity", "Viscosity"]);
    let (lo, hi) = (min.get::<kelvin>(), max.get::<kelvin>());
    for i in 0..=200_u32 {
        let t = ThermodynamicTemperature::new::<kelvin>(lo + (hi - lo) * f64::from(i) / 200.0);
        let mut traces = [None; 4];
        for ((trace, property), reference) in traces.iter_mut().zip(properties).zip(&reference) {
            if let (Ok(value), Ok(reference)) = (water.table().value(property, t), reference) {
                *trace = Some(value / reference);
            }
        }
        obs.record(t.get::<kelvin>(), traces);
    }

    let mean = ThermodynamicTemperature::new::<kelvin>((lo + hi) / 2.0);
    let fluid = FluidProperties::from_model(&water, mean)?;
    let pipe = HeatedPipe::new(HeatedPipeParameters::default().with_fluid(fluid))?;

    obs.show(
        ShowConfig::new()
            .title(format!(
                "Water properties relative to {lo} K (pipe stability limit with water at {:.1} K: {:.2} s)",
                mean.get::<kelvin>(),
                pipe.max_stable_time_step().get::<second>(),
            ))
            .legend(),
    )?;

    Ok(())
}
