use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Scalar B-spline law: poles, full (expanded) knot vector and degree.
struct BSplineLaw {
    poles: Vec<f64>,
    knots: Vec<f64>,
    degree: usize,
}

impl BSplineLaw {
    /// Clamped law from distinct knot values and their multiplicities.
    fn new(poles: Vec<f64>, knot_values: &[f64], mults: &[usize], degree: usize) -> Result<Self> {
        let knots: Vec<f64> = knot_values
            .iter()
            .zip(mults)
            .flat_map(|(&k, &m)| std::iter::repeat(k).take(m))
            .collect();

        if knots.len() != poles.len() + degree + 1 {
            bail!(
                "{} knots do not match {} poles of degree {degree}",
                knots.len(),
                poles.len()
            );
        }
        Ok(Self {
            poles,
            knots,
            degree,
        })
    }

    /// Index of the knot span containing `u`; the last span is closed on the right.
    fn find_span(&self, u: f64) -> usize {
        let n = self.poles.len() - 1;
        let p = self.degree;
        if u >= self.knots[n + 1] {
            return n;
        }
        if u <= self.knots[p] {
            return p;
        }
        let (mut low, mut high) = (p, n + 1);
        let mut mid = (low + high) / 2;
        while u < self.knots[mid] || u >= self.knots[mid + 1] {
            if u < self.knots[mid] {
                high = mid;
            } else {
                low = mid;
            }
            mid = (low + high) / 2;
        }
        mid
    }

    /// Non-vanishing basis functions `N[span-p..=span]` at `u` (Cox–de Boor).
    fn basis(&self, span: usize, u: f64) -> Vec<f64> {
        let p = self.degree;
        let mut n = vec![0.0; p + 1];
        let mut left = vec![0.0; p + 1];
        let mut right = vec![0.0; p + 1];
        n[0] = 1.0;
        for j in 1..=p {
            left[j] = u - self.knots[span + 1 - j];
            right[j] = self.knots[span + j] - u;
            let mut saved = 0.0;
            for r in 0..j {
                let temp = n[r] / (right[r + 1] + left[j - r]);
                n[r] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }
            n[j] = saved;
        }
        n
    }

    /// Replace pole `index` (0-based).
    fn set_pole(&mut self, index: usize, pole: f64) -> Result<()> {
        match self.poles.get_mut(index) {
            Some(slot) => *slot = pole,
            None => bail!("pole {index} out of range ({} poles)", self.poles.len()),
        }
        Ok(())
    }

    /// Distinct knot values with their multiplicities.
    fn knot_multiplicities(&self) -> Vec<(f64, usize)> {
        let mut out: Vec<(f64, usize)> = Vec::new();
        for &k in &self.knots {
            match out.last_mut() {
                Some((last, mult)) if *last == k => *mult += 1,
                _ => out.push((k, 1)),
            }
        }
        out
    }

    fn value(&self, u: f64) -> f64 {
        let span = self.find_span(u);
        self.basis(span, u)
            .iter()
            .enumerate()
            .map(|(j, b)| b * self.poles[span - self.degree + j])
            .sum()
    }
}

/// Cubic clamped law with one interior knot.
fn initial_law() -> Result<BSplineLaw> {
    BSplineLaw::new(vec![0.0, 2.0, 3.0, 1.0, 1.0], &[0.0, 0.5, 1.0], &[4, 1, 4], 3)
}

fn print_poles(title: &str, law: &BSplineLaw) {
    println!("\n\n{title}");
    for (i, pole) in law.poles.iter().enumerate() {
        println!("{:>20}{:>20.8}", i + 1, pole);
    }
}

fn print_knots(law: &BSplineLaw) {
    println!("\n\nKnot vector");
    println!("{:>10}{:>10}", "Values", "Mults");
    for (value, mult) in law.knot_multiplicities() {
        println!("{value:>10}{mult:>10}");
    }
}

fn print_samples(samples: &[(f64, f64)]) {
    println!("\n\nEvaluate the B-Spline law");
    println!("{:>15}{:>15}", "u-parameter", "BSpline value");
    for (u, f) in samples {
        println!("{u:>15.8}{f:>15.8}");
    }
}

fn sample(law: &BSplineLaw, count: usize) -> Vec<(f64, f64)> {
    let step = 1.0 / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let u = step * i as f64;
            (u, law.value(u))
        })
        .collect()
}

fn write_table(path: &Path, samples: &[(f64, f64)]) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for (u, f) in samples {
        writeln!(out, "{u:.8}, {f:.8}")?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut law = initial_law()?;
    print_poles("Original set of control points", &law);
    law.set_pole(1, 1.0)?;
    print_poles("New set of control points", &law);
    print_knots(&law);

    let samples = sample(&law, 101);
    print_samples(&samples);

    let output_path = Path::new("output/bspline_law.csv");
    write_table(output_path, &samples)?;

    println!(
        "\n\nWrote {} samples of a degree-{} law ({} poles) to {}",
        samples.len(),
        law.degree,
        law.poles.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    /// The initial law with its second pole moved down to 1.0, as `main` writes it.
    fn demo_law() -> Result<BSplineLaw> {
        let mut law = initial_law()?;
        law.set_pole(1, 1.0)?;
        Ok(law)
    }

    #[test]
    fn clamped_law_interpolates_end_poles() {
        let law = demo_law().unwrap();
        assert_approx_eq!(law.value(0.0), 0.0);
        assert_approx_eq!(law.value(1.0), 1.0);
    }

    #[test]
    fn basis_is_a_partition_of_unity() {
        let law = demo_law().unwrap();
        for i in 0..=20 {
            let u = i as f64 / 20.0;
            let span = law.find_span(u);
            let total: f64 = law.basis(span, u).iter().sum();
            assert_approx_eq!(total, 1.0, 1e-12);
        }
    }

    #[test]
    fn value_at_interior_knot() {
        // At u = 0.5 only poles 1..=3 contribute, weighted 1/4, 1/2, 1/4.
        let law = demo_law().unwrap();
        assert_approx_eq!(law.value(0.5), 0.25 * 1.0 + 0.5 * 3.0 + 0.25 * 1.0);
    }

    #[test]
    fn moving_a_pole_changes_the_interior_only() {
        let initial = initial_law().unwrap();
        let moved = demo_law().unwrap();
        assert_eq!(moved.poles, vec![0.0, 1.0, 3.0, 1.0, 1.0]);
        assert_approx_eq!(initial.value(0.0), moved.value(0.0));
        assert_approx_eq!(initial.value(1.0), moved.value(1.0));
        assert!(initial.value(0.25) > moved.value(0.25));
    }

    #[test]
    fn out_of_range_pole_is_rejected() {
        let mut law = initial_law().unwrap();
        assert!(law.set_pole(5, 0.0).is_err());
    }

    #[test]
    fn knots_collapse_to_values_and_multiplicities() {
        let law = demo_law().unwrap();
        assert_eq!(
            law.knot_multiplicities(),
            vec![(0.0, 4), (0.5, 1), (1.0, 4)]
        );
    }

    #[test]
    fn mismatched_knots_are_rejected() {
        assert!(BSplineLaw::new(vec![0.0, 1.0], &[0.0, 1.0], &[4, 4], 3).is_err());
    }

    #[test]
    fn written_table_uses_two_trimmed_columns() {
        let path = std::env::temp_dir()
            .join(format!("bspline-law-plot-gen-{}", std::process::id()))
            .join("bspline_law.csv");
        let law = demo_law().unwrap();
        write_table(&path, &sample(&law, 11)).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_path(&path)
            .unwrap();
        let rows: Vec<(f64, f64)> = reader
            .records()
            .map(|r| {
                let r = r.unwrap();
                assert_eq!(r.len(), 2);
                (r[0].parse().unwrap(), r[1].parse().unwrap())
            })
            .collect();
        fs::remove_dir_all(path.parent().unwrap()).unwrap();

        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0], (0.0, 0.0));
        assert_eq!(rows[10], (1.0, 1.0));
        assert_eq!(rows[5].0, 0.5);
    }
}
