use std::{fmt, ops::BitOr};

/// Configuration flags of a graph, fixed at construction.
///
/// The flags can be combined with `|`:
///
/// ```
/// use sgl::core::Config;
///
/// let config = Config::UNDIRECTED | Config::NOT_WEIGHTED;
/// assert!(!config.is_directed());
/// assert!(config.contains(Config::NOT_WEIGHTED));
/// ```
///
/// Only the direction is interpreted by the engines. Weight and
/// representation flags are recorded so that callers can inspect them, but
/// they have no effect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Config(u32);

impl Config {
    pub const UNDIRECTED: Config = Config(1);
    pub const DIRECTED: Config = Config(2);
    pub const MIXED: Config = Config(4);
    pub const WEIGHTED: Config = Config(8);
    pub const NOT_WEIGHTED: Config = Config(16);
    pub const ADJACENCY_MATRIX: Config = Config(32);
    pub const ADJACENCY_LIST: Config = Config(64);

    pub const fn empty() -> Self {
        Config(0)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn contains(&self, other: Config) -> bool {
        self.0 & other.0 == other.0
    }

    /// A graph is directed unless it was explicitly configured as
    /// undirected. An empty configuration means directed.
    pub const fn is_directed(&self) -> bool {
        !self.contains(Config::UNDIRECTED)
    }
}

impl BitOr for Config {
    type Output = Config;

    fn bitor(self, rhs: Config) -> Config {
        Config(self.0 | rhs.0)
    }
}

impl From<u32> for Config {
    fn from(bits: u32) -> Self {
        Config(bits)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Config, &str); 7] = [
            (Config::UNDIRECTED, "UNDIRECTED"),
            (Config::DIRECTED, "DIRECTED"),
            (Config::MIXED, "MIXED"),
            (Config::WEIGHTED, "WEIGHTED"),
            (Config::NOT_WEIGHTED, "NOT_WEIGHTED"),
            (Config::ADJACENCY_MATRIX, "ADJACENCY_MATRIX"),
            (Config::ADJACENCY_LIST, "ADJACENCY_LIST"),
        ];

        let mut list = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                list.entry(&format_args!("{name}"));
            }
        }
        list.finish()
    }
}
