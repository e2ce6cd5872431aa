//! Statistics and results for the hop-scaling experiment

use pastry_sim::{DigestAlgorithm, HopCount, Seed};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Experiment result
#[derive(Debug, Clone)]
pub struct ExperimentResult {
    /// Seed used for identifier spaces and route sampling
    pub seed_used: Seed,

    /// Identifier digest used
    pub digest: DigestAlgorithm,

    /// One entry per network size, ascending
    pub sizes: Vec<SizeResult>,

    /// Fit of `hops ~ a + b log10(N)`, absent with fewer than two sizes
    pub fit: Option<RegressionFit>,

    /// Total routes simulated
    pub total_routes: usize,
}

/// Hop statistics for a single network size
#[derive(Debug, Clone, PartialEq)]
pub struct SizeResult {
    pub nodes: usize,

    /// Mean of the batch means
    pub mean_hops: f64,

    /// Sample standard deviation of the batch means
    pub stddev_hops: f64,

    /// Largest hop count seen for this size
    pub max_hops: HopCount,
}

/// Weighted least-squares fit of `y = a + b x`
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionFit {
    pub a: f64,
    pub b: f64,
    pub stddev_a: f64,
    pub stddev_b: f64,
    pub chi2: f64,

    /// Upper-tail chi-squared probability with `points - 2` degrees of
    /// freedom; absent for a two-point fit
    pub p_value: Option<f64>,
}

impl RegressionFit {
    /// Predicted mean hops for a network of `nodes` nodes
    pub fn predict(&self, nodes: usize) -> f64 {
        self.a + self.b * (nodes as f64).log10()
    }
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); zero below two samples
pub fn sample_stddev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Probability that a chi-squared variable with `freedom` degrees exceeds `chi2`
pub fn chi2_upper_tail(chi2: f64, freedom: usize) -> Option<f64> {
    let dist = ChiSquared::new(freedom as f64).ok()?;
    Some(dist.sf(chi2.max(0.0)))
}

/// Fit `y = a + b x` with per-point standard deviations `sigma`
///
/// Points are weighted by `1 / sigma^2`; if any sigma is zero every point is
/// weighted equally. Returns `None` when the x values do not span a line.
pub fn fit_line(points: &[(f64, f64, f64)]) -> Option<RegressionFit> {
    if points.len() < 2 {
        return None;
    }

    let weighted = points.iter().all(|&(_, _, sigma)| sigma > 0.0);
    let weight = |sigma: f64| if weighted { 1.0 / (sigma * sigma) } else { 1.0 };

    let (mut s, mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for &(x, y, sigma) in points {
        let w = weight(sigma);
        s += w;
        sx += w * x;
        sy += w * y;
        sxx += w * x * x;
        sxy += w * x * y;
    }

    let delta = s * sxx - sx * sx;
    if delta.abs() <= f64::EPSILON * s * sxx {
        return None;
    }

    let a = (sxx * sy - sx * sxy) / delta;
    let b = (s * sxy - sx * sy) / delta;
    let chi2: f64 = points
        .iter()
        .map(|&(x, y, sigma)| weight(sigma) * (y - a - b * x).powi(2))
        .sum();

    Some(RegressionFit {
        a,
        b,
        stddev_a: (sxx / delta).sqrt(),
        stddev_b: (s / delta).sqrt(),
        chi2,
        p_value: chi2_upper_tail(chi2, points.len() - 2),
    })
}

/// Fit mean hops against `log10(nodes)`
pub fn fit_log_linear(sizes: &[SizeResult]) -> Option<RegressionFit> {
    let points: Vec<(f64, f64, f64)> = sizes
        .iter()
        .map(|r| ((r.nodes as f64).log10(), r.mean_hops, r.stddev_hops))
        .collect();
    fit_line(&points)
}

impl ExperimentResult {
    /// Mean hops the regression line predicts for `nodes`
    pub fn fitted_hops(&self, nodes: usize) -> Option<f64> {
        self.fit.as_ref().map(|fit| fit.predict(nodes))
    }

    /// Print a summary of the experiment results
    pub fn print_summary(&self) {
        println!("\n╔════════════════════════════════════════════════════════╗");
        println!("║        Pastry Hop Scaling Results                      ║");
        println!("╚════════════════════════════════════════════════════════╝\n");

        println!("Configuration:");
        println!("  Seed: {}", self.seed_used);
        println!("  Digest: {}", self.digest);
        println!("  Routes: {}\n", self.total_routes);

        println!("\tAverage Hops H");
        println!("_____________________________________\n");
        println!("Nodes\tMean\t\tStddev\t\tMax\tFit");
        for r in &self.sizes {
            let fitted = self
                .fitted_hops(r.nodes)
                .map(|h| format!("{:.3}", h))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{}\t{:.6}\t{:.6}\t{}\t{}",
                r.nodes, r.mean_hops, r.stddev_hops, r.max_hops, fitted
            );
        }
        println!();

        match &self.fit {
            Some(fit) => {
                println!("H = a + b log N");
                println!("a = {:.2}", fit.a);
                println!("b = {:.2}", fit.b);
                println!("stddev(a) = {:.2}", fit.stddev_a);
                println!("stddev(b) = {:.2}", fit.stddev_b);
                println!("chi^2 = {:.6}", fit.chi2);
                match fit.p_value {
                    Some(p) => println!("p-value = {:.6}", p),
                    None => println!("p-value = n/a (two sizes)"),
                }
            }
            None => println!("Not enough network sizes for a fit"),
        }
        println!();
    }

    /// Write per-size results as CSV
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "nodes,log10_nodes,mean_hops,stddev_hops,max_hops")?;
        for r in &self.sizes {
            writeln!(
                writer,
                "{},{:.6},{:.6},{:.6},{}",
                r.nodes,
                (r.nodes as f64).log10(),
                r.mean_hops,
                r.stddev_hops,
                r.max_hops
            )?;
        }

        writer.flush()
    }
}
