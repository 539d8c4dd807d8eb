//! Runs the annealer on small route, knapsack and decoding instances and
//! prints each result next to the known answer.
//!
//! Log output is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).

use std::error::Error;
use u_anneal::problems::{CodewordProblem, Item, RouteProblem, SubsetProblem};
use u_anneal::sa::{
    sample_cooling_schedule, AnnealConfig, AnnealProblem, Annealer, EnergyTrace, LogProgress,
};

const ROUTE_CASES: [([[f64; 4]; 4], [usize; 4]); 2] = [
    (
        [
            [0.0, 6.0, 5.0, 5.0],
            [6.0, 0.0, 7.0, 4.0],
            [5.0, 7.0, 0.0, 3.0],
            [5.0, 4.0, 3.0, 0.0],
        ],
        [0, 1, 3, 2],
    ),
    (
        [
            [0.0, 8.0, 3.0, 5.0],
            [8.0, 0.0, 7.0, 4.0],
            [3.0, 7.0, 0.0, 4.0],
            [5.0, 4.0, 4.0, 0.0],
        ],
        [0, 1, 3, 2],
    ),
];

fn run_routes() -> Result<(), Box<dyn Error>> {
    let config = AnnealConfig::default()
        .with_trials_per_step(100)
        .with_t_end(0.5);

    for (matrix, answer) in ROUTE_CASES {
        let route = RouteProblem::from_matrix(matrix.iter().map(|r| r.to_vec()).collect())?;
        let annealer = Annealer::new(route, sample_cooling_schedule(30.0), config.clone())?;
        let result = annealer.run_with_progress(None, &mut LogProgress)?;
        let expected = annealer.problem().energy(&answer.to_vec())?;

        println!("route: {:?} {} {}", result.state, result.energy, expected);
        println!("  edges: {:?}", annealer.problem().edges(&result.state));
    }
    Ok(())
}

fn run_knapsack() -> Result<(), Box<dyn Error>> {
    let items = vec![
        Item::new(60.0, 10.0),
        Item::new(100.0, 20.0),
        Item::new(120.0, 30.0),
    ];
    let config = AnnealConfig::default()
        .with_trials_per_step(20)
        .with_t_end(1.0);
    let annealer = Annealer::new(
        SubsetProblem::new(items, 50.0)?,
        sample_cooling_schedule(200.0),
        config,
    )?;

    let mut trace = EnergyTrace::new();
    let result = annealer.run_with_progress(None, &mut trace)?;
    println!(
        "knapsack: {:?} value {} (optimum 220)",
        result.state, -result.energy
    );
    println!("  value curve: {:?}", trace.energies());
    Ok(())
}

fn run_decoding() -> Result<(), Box<dyn Error>> {
    let generator: Vec<Vec<u8>> = (0..4)
        .map(|i| (0..7).map(|j| u8::from(i == j)).collect())
        .collect();
    let received = [0u8; 7];
    let config = AnnealConfig::default()
        .with_trials_per_step(20)
        .with_t_end(1.0);
    let annealer = Annealer::new(
        CodewordProblem::from_bits(&generator, &received)?,
        sample_cooling_schedule(100.0),
        config,
    )?;

    let mut trace = EnergyTrace::new();
    let result = annealer.run_with_progress(Some(vec![true; 4]), &mut trace)?;
    println!(
        "decoding: {:?} distance*10 {} (optimum 0)",
        result.state, result.energy
    );
    println!("  distance curve: {:?}", trace.energies());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    run_routes()?;
    run_knapsack()?;
    run_decoding()?;
    Ok(())
}
