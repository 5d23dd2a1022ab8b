use std::time::Instant;

pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, population: usize);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> Self::Str;
}

pub struct SimpleRecord {
    gens: usize,
    population: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(population: usize) -> Self {
        Self {
            gens: 0,
            population,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, population: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.population = population;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed().as_millis() >= 500
    }
    fn report(&mut self) -> Self::Str {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, population:{}",
            gens_per_sec, self.gens, self.population
        )
    }
}

pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(population: usize) -> Self {
        Self {
            inner: SimpleRecord::new(population),
            data: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        use std::{
            fs,
            io::{self, Write},
        };

        let file = fs::File::create(path)?;
        let mut file = io::BufWriter::new(file);

        file.write_all(b"gen,delta_t,population\n")?;
        for (i, (delta, population)) in self.data.iter().enumerate() {
            let line = format!("{},{},{}\n", i, delta, population);
            file.write_all(line.as_bytes())?;
        }
        file.flush()
    }
}
impl Recorder for CsvRecord {
    type Str = <SimpleRecord as Recorder>::Str;

    fn record(&mut self, population: usize) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, population));
        self.inner.record(population);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> Self::Str {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(population: usize, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(population))
        } else {
            Self::Simple(SimpleRecord::new(population))
        }
    }
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        match self {
            Self::Csv(r) => r.save(path),
            _ => panic!("cannot save statistics if not CsvRecord type"),
        }
    }
}
impl Recorder for SwitchRecorder {
    type Str = String;

    fn record(&mut self, population: usize) {
        match self {
            Self::Csv(r) => r.record(population),
            Self::Simple(r) => r.record(population),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Simple(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> Self::Str {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tracks_generations_and_population() {
        let mut rec = SimpleRecord::new(10);
        rec.record(12);
        rec.record(9);

        let report = rec.report();
        assert!(report.contains("gens:2"));
        assert!(report.contains("population:9"));
    }

    #[test]
    fn csv_recorder_collects_one_row_per_generation() {
        let mut rec = CsvRecord::new(5);
        rec.record(6);
        rec.record(4);
        rec.record(4);

        assert_eq!(rec.data.len(), 3);
        assert_eq!(rec.data[1].1, 4);
    }

    #[test]
    fn switch_recorder_picks_the_backend() {
        assert!(matches!(
            SwitchRecorder::new(0, true),
            SwitchRecorder::Csv(_)
        ));
        assert!(matches!(
            SwitchRecorder::new(0, false),
            SwitchRecorder::Simple(_)
        ));
    }
}
