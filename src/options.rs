use std::time::Duration;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("t", "threads", "enables multi-threading");
        opts.optopt("n", "size", "board side length", "SIZE");
        opts.optopt("r", "rule", "birth/survival rule, e.g. B3/S23", "RULE");
        opts.optopt(
            "m",
            "mode",
            "start mode: random | sparse | dense | demo",
            "MODE",
        );
        opts.optopt("p", "pattern", "seed from an RLE pattern file", "FILE");
        opts.optopt("", "at", "pattern anchor in grid coordinates", "ROW,COL");
        opts.optopt("", "seed", "seed for the random start modes", "U64");
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("o", "output", "write the final grid as RLE", "FILE");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: lifelike [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }

    pub fn size(&self) -> usize {
        self.matches.opt_get("size").unwrap().unwrap_or(100)
    }
    pub fn rule(&self) -> String {
        self.matches
            .opt_str("rule")
            .unwrap_or_else(|| "B3/S23".to_owned())
    }
    pub fn mode(&self) -> String {
        self.matches
            .opt_str("mode")
            .unwrap_or_else(|| "random".to_owned())
    }

    pub fn pattern_file(&self) -> Option<String> {
        self.matches.opt_str("pattern")
    }
    pub fn pattern_origin(&self) -> (usize, usize) {
        let Some(at) = self.matches.opt_str("at") else {
            return (0, 0);
        };
        let (row, col) = at.split_once(',').expect("anchor as ROW,COL");
        (
            row.trim().parse().expect("anchor row"),
            col.trim().parse().expect("anchor col"),
        )
    }

    pub fn seed(&self) -> Option<u64> {
        self.matches.opt_get("seed").unwrap()
    }

    pub fn generations(&self) -> usize {
        self.matches.opt_get("gens").unwrap().unwrap_or(usize::MAX) // kinda hacky way of saying "infinity"
    }
    pub fn sleep(&self) -> Option<Duration> {
        match self.matches.opt_get("sleep").unwrap() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        }
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}
