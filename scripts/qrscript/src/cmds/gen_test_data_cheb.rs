use std::path::{Path, PathBuf};

use anyhow::{ensure, Context};
use dialoguer::Confirm;
use itertools::{izip, Itertools};
use qcheb::cheb::ChebApproxConfig;

use crate::util::path::repo_root;

// -----------------------------------------------------------------------------
// Args
// -----------------------------------------------------------------------------
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Directory of JSON cases [default: libs/core/qcheb/testdata/cheb/in]
    #[clap(short = 'i', long = "indir")]
    pub indir: Option<PathBuf>,

    /// Directory to write CSVs into [default: libs/core/qcheb/testdata/cheb/out]
    #[clap(short = 'o', long = "outdir")]
    pub outdir: Option<PathBuf>,

    /// Clean the output directory without asking
    #[clap(long = "auto-clean")]
    pub auto_clean: bool,
}

impl Args {
    pub fn run(&self) -> anyhow::Result<()> {
        let testdata = || -> anyhow::Result<PathBuf> {
            Ok(repo_root()?.join("libs/core/qcheb/testdata/cheb"))
        };
        let indir = match &self.indir {
            Some(dir) => dir.clone(),
            None => testdata()?.join("in"),
        };
        let outdir = match &self.outdir {
            Some(dir) => dir.clone(),
            None => testdata()?.join("out"),
        };
        ensure!(indir.is_dir(), "Input directory does not exist at {:?}", indir);
        reset_outdir(&outdir, self.auto_clean)?;

        let cases = std::fs::read_dir(&indir)?
            .map(|entry| entry.map(|e| e.path()))
            .filter_ok(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect::<Result<Vec<_>, _>>()?;
        for path in cases.into_iter().sorted() {
            log::info!("Generating test data for {:?}", path);
            let case = Case::read(&path)?;
            let contents = case
                .into_csv()
                .with_context(|| format!("Evaluating case at {:?}", path))?;

            let mut dst = outdir.join(path.file_stem().unwrap_or_default());
            dst.set_extension("csv");
            std::fs::write(dst, contents)?;
        }
        Ok(())
    }
}

fn reset_outdir(outdir: &Path, auto_clean: bool) -> anyhow::Result<()> {
    if outdir.exists() {
        if !auto_clean {
            let confirmed = Confirm::new()
                .default(false)
                .show_default(true)
                .with_prompt(format!("Clean existing output directory {:?}?", outdir))
                .interact()?;
            ensure!(confirmed, "Operation cancelled.");
        }
        log::info!("Cleaning output directory at {:?}", outdir);
        std::fs::remove_dir_all(outdir)?;
    }
    std::fs::create_dir_all(outdir)?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Case
// -----------------------------------------------------------------------------
/// Approximant and the grid `start, start + step, ...` (up to `end`) to tabulate it on.
#[derive(Debug, serde::Deserialize)]
struct Case {
    start: f64,
    end: f64,
    step: f64,
    approx: ChebApproxConfig,
}

impl Case {
    fn read(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        serde_json::from_reader(file).with_context(|| format!("Reading test case at {:?}", path))
    }

    fn grid(&self) -> Vec<f64> {
        (0..)
            .map(|i| self.start + self.step * i as f64)
            .take_while(|x| *x <= self.end)
            .collect()
    }

    /// CSV with header `x,y,dy,d2y`, without a trailing newline.
    fn into_csv(self) -> anyhow::Result<String> {
        ensure!(self.step > 0.0, "Step must be positive, but got {}", self.step);
        let xs = self.grid();
        let f = self.approx.build()?;
        log::debug!("{f}");

        // derivative series are built once for the whole grid
        let df = f.derivative();
        let d2f = df.derivative();
        let ys = f.eval_many(&xs)?;
        let dys = df.eval_many(&xs)?;
        let d2ys = d2f.eval_many(&xs)?;

        let rows = izip!(&xs, &ys, &dys, &d2ys)
            .map(|(x, y, dy, d2y)| format!("{x},{y},{dy},{d2y}"));
        Ok(std::iter::once("x,y,dy,d2y".to_string()).chain(rows).join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn case(json: serde_json::Value) -> Case {
        serde_json::from_value(json).unwrap()
    }

    #[rstest]
    #[case(-1.0, 1.0, 0.5, vec![-1.0, -0.5, 0.0, 0.5, 1.0])]
    #[case(0.0, 1.0, 0.3, vec![0.0, 0.3, 0.6, 0.8999999999999999])]
    #[case(2.0, 1.0, 0.5, vec![])]
    fn test_grid(
        #[case] start: f64,
        #[case] end: f64,
        #[case] step: f64,
        #[case] expected: Vec<f64>,
    ) {
        let tested = case(serde_json::json!({
            "start": start,
            "end": end,
            "step": step,
            "approx": { "source": "sin" },
        }));

        assert_eq!(tested.grid(), expected);
    }

    #[test]
    fn test_into_csv() {
        let tested = case(serde_json::json!({
            "start": -1.0,
            "end": 1.0,
            "step": 0.5,
            "approx": { "source": [0.0, 0.0, 1.0] },
        }));

        let contents = tested.into_csv().unwrap();

        let lines = contents.split('\n').collect::<Vec<_>>();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "x,y,dy,d2y");
        // T_2 = 2x^2 - 1
        for line in &lines[1..] {
            let vals = line
                .split(',')
                .map(|v| v.parse::<f64>().unwrap())
                .collect::<Vec<_>>();
            let x = vals[0];
            approx::assert_abs_diff_eq!(vals[1], 2.0 * x * x - 1.0, epsilon = 1e-12);
            approx::assert_abs_diff_eq!(vals[2], 4.0 * x, epsilon = 1e-12);
            approx::assert_abs_diff_eq!(vals[3], 4.0, epsilon = 1e-12);
        }
    }

    #[rstest]
    #[case(serde_json::json!({
        "start": 0.0,
        "end": 2.0,
        "step": 0.5,
        "approx": { "source": "sin", "interval": [0.0, 1.0] },
    }))]
    #[case(serde_json::json!({
        "start": 0.0,
        "end": 1.0,
        "step": 0.0,
        "approx": { "source": "sin" },
    }))]
    #[case(serde_json::json!({
        "start": 0.0,
        "end": 1.0,
        "step": 0.5,
        "approx": { "source": [] },
    }))]
    fn test_into_csv_err(#[case] json: serde_json::Value) {
        assert!(case(json).into_csv().is_err());
    }

    #[test]
    fn test_read() {
        let name = format!("qrscript-{}-case.json", std::process::id());
        let path = std::env::temp_dir().join(name);
        let json = r#"{"start": 0, "end": 1, "step": 0.25, "approx": {"source": "exp"}}"#;
        std::fs::write(&path, json).unwrap();

        let tested = Case::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(tested.grid().len(), 5);
        assert_eq!(tested.approx.degree, 10);
    }
}
