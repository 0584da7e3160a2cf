use std::time::Duration;

// the reference toy's built-in defaults
const DEFAULT_DIM: usize = 24;
const DEFAULT_SLEEP_MILLIS: u64 = 100;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("t", "threads", "enables multi-threading");
        opts.optflag("", "no-gen", "hide the generation footer");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt("f", "fill", "set fill type", "TYPE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: torus-life [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn width(&self) -> Option<usize> {
        self.matches.opt_get("width").unwrap()
    }
    fn height(&self) -> Option<usize> {
        self.matches.opt_get("height").unwrap()
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }
    pub fn show_generation(&self) -> bool {
        !self.matches.opt_present("no-gen")
    }

    pub fn generations(&self) -> usize {
        self.matches.opt_get("gens").unwrap().unwrap_or(usize::MAX) // kinda hacky way of saying "infinity"
    }
    pub fn sleep(&self) -> Option<Duration> {
        match self.matches.opt_get("sleep").unwrap() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(DEFAULT_SLEEP_MILLIS)),
            None => None,
        }
    }

    pub fn grid_size(&self) -> (usize, usize) {
        let default = if self.console() {
            // each cell renders as two glyphs wide, and the last
            // terminal row is reserved for the footer
            let (cols, rows) = crossterm::terminal::size().unwrap();
            ((cols as usize / 2).max(1), (rows as usize).saturating_sub(1).max(1))
        } else {
            (DEFAULT_DIM, DEFAULT_DIM)
        };

        (
            self.width().unwrap_or(default.0),
            self.height().unwrap_or(default.1),
        )
    }
    pub fn fill_mode(&self) -> FillMode {
        let mode_str = self.matches.opt_str("fill");
        FillMode::new(mode_str.as_deref().unwrap_or("random")).expect("valid fill mode string")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    fn fill_cell<R: rand::Rng>(&self, x: usize, y: usize, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (x + y) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }

    /// Produces the row-major seed sequence for a `w` by `h` grid.
    pub fn create_seed(self, w: usize, h: usize) -> Vec<bool> {
        let mut rng = rand::rng();
        let mut seed = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                seed.push(self.fill_cell(x, y, &mut rng));
            }
        }
        seed
    }
}
