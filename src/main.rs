//! Command-line driver: generates the synthetic network, then either runs the
//! full comparison sweep to CSV or compares the solvers on one pair under the
//! weight presets.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use qos_route::baseline::solve_baseline;
use qos_route::cost::{evaluate_path, CostWeights};
use qos_route::experiment::{run_experiment, write_csv, ExperimentConfig};
use qos_route::ga::{GaConfig, GaRunner};
use qos_route::graph::generator::{generate_network, GeneratorConfig};
use qos_route::graph::{Network, NodeId, Topology};
use qos_route::sa::{SaConfig, SaRunner};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qos-route")]
#[command(about = "Multi-objective QoS path search on a synthetic network", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    network: NetworkArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct NetworkArgs {
    /// Number of nodes in the generated network
    #[arg(long, global = true, default_value_t = 250)]
    nodes: usize,

    /// Independent edge probability
    #[arg(long, global = true, default_value_t = 0.4)]
    edge_probability: f64,

    /// Seed of the network generator
    #[arg(long, global = true, default_value_t = 42)]
    network_seed: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Run Baseline, GA and SA over sampled demands and write a CSV summary
    Experiment {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 20)]
        samples: usize,
        #[arg(long, default_value_t = 5)]
        repeats: usize,
        #[arg(long, default_value = "results/results_summary.csv")]
        out: PathBuf,
    },

    /// Compare the solvers on one pair under each weight preset
    Scenarios {
        #[arg(long, default_value_t = 0)]
        source: NodeId,
        #[arg(long, default_value_t = 10)]
        target: NodeId,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let net = generate_network(
        &GeneratorConfig::default()
            .with_node_count(cli.network.nodes)
            .with_edge_probability(cli.network.edge_probability)
            .with_seed(cli.network.network_seed),
    )
    .context("generating network")?;

    match cli.command {
        Commands::Experiment {
            seed,
            samples,
            repeats,
            out,
        } => {
            let config = ExperimentConfig::default()
                .with_seed(seed)
                .with_sample_count(samples)
                .with_repeats(repeats);
            let rows = export_experiment(&net, &config, &out)?;
            println!("wrote {rows} rows to {}", out.display());
        }
        Commands::Scenarios {
            source,
            target,
            seed,
        } => run_scenarios(&net, source, target, seed)?,
    }

    tracing::debug!("done");
    Ok(())
}

/// Runs the sweep and writes it to `out`, creating parent directories.
/// Returns the number of rows written.
fn export_experiment(net: &Network, config: &ExperimentConfig, out: &Path) -> Result<usize> {
    let rows = run_experiment(net, config).context("running experiment")?;

    if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_csv(&rows, BufWriter::new(file)).context("writing summary")?;
    Ok(rows.len())
}

fn run_scenarios(net: &Network, source: NodeId, target: NodeId, seed: u64) -> Result<()> {
    println!(
        "network: {} nodes, {} edges",
        net.node_count(),
        net.edge_count()
    );

    let scenarios = [
        ("equal", CostWeights::default()),
        ("delay-focused", CostWeights::DELAY_FOCUSED),
        ("reliability-focused", CostWeights::RELIABILITY_FOCUSED),
        ("bandwidth-focused", CostWeights::BANDWIDTH_FOCUSED),
    ];

    for (name, weights) in scenarios {
        println!("\n--- {name} ({}, {}, {}) ---", weights.delay, weights.reliability, weights.resource);

        let baseline = solve_baseline(net, source, target, &weights)?;
        report(net, "baseline", &baseline.path, baseline.cost);

        let ga = GaConfig::default().with_weights(weights).with_seed(seed);
        let ga = GaRunner::run(net, source, target, &ga)?;
        report(net, "ga", &ga.best_path, ga.best_cost);

        let sa = SaConfig::default().with_weights(weights).with_seed(seed);
        let sa = SaRunner::run(net, source, target, &sa)?;
        report(net, "sa", &sa.best_path, sa.best_cost);
    }
    Ok(())
}

fn report(net: &Network, label: &str, path: &[NodeId], cost: f64) {
    let m = evaluate_path(net, path);
    println!(
        "{label:<8} cost={cost:.4} delay={:.3}ms rel_cost={:.5} res_cost={:.5} path={path:?}",
        m.delay, m.reliability_cost, m.resource_cost
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_experiment_defaults() {
        let cli = Cli::try_parse_from(["qos-route", "experiment"]).unwrap();
        assert_eq!(cli.network.nodes, 250);
        assert_eq!(cli.network.network_seed, 42);
        match cli.command {
            Commands::Experiment {
                seed,
                samples,
                repeats,
                out,
            } => {
                assert_eq!((seed, samples, repeats), (42, 20, 5));
                assert_eq!(out, PathBuf::from("results/results_summary.csv"));
            }
            Commands::Scenarios { .. } => panic!("expected experiment"),
        }
    }

    #[test]
    fn test_scenarios_args() {
        let cli = Cli::try_parse_from([
            "qos-route",
            "scenarios",
            "--source",
            "3",
            "--target",
            "7",
            "--nodes",
            "30",
        ])
        .unwrap();
        assert_eq!(cli.network.nodes, 30);
        assert!(matches!(
            cli.command,
            Commands::Scenarios {
                source: 3,
                target: 7,
                seed: 42
            }
        ));
    }

    #[test]
    fn test_export_experiment_writes_csv() {
        let net = generate_network(
            &GeneratorConfig::default()
                .with_node_count(25)
                .with_edge_probability(0.3)
                .with_seed(42),
        )
        .unwrap();
        let config = ExperimentConfig::default()
            .with_sample_count(2)
            .with_repeats(1)
            .with_ga(GaConfig::default().with_population_size(8).with_elite_count(3).with_generations(3))
            .with_sa(SaConfig::default().with_max_iterations(30));

        let dir = std::env::temp_dir().join(format!("qos-route-export-{}", std::process::id()));
        let out = dir.join("nested").join("summary.csv");
        let rows = export_experiment(&net, &config, &out).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().count(), rows + 1);
        assert!(text.starts_with("sample_id,source,dest,B_mbps,algo,"));
        fs::remove_dir_all(&dir).unwrap();
    }
}
