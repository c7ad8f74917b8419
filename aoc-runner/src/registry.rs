//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};

/// Base year (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Factory entry with metadata
struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Immutable storage for solver factories with O(1) access
///
/// Uses a flat Vec with index math. Supports years 2015-2034 and days 1-25.
pub struct SolverStorage {
    entries: Vec<Option<FactoryEntry>>,
}

impl SolverStorage {
    /// Iterate over metadata for all registered factories, in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    /// Check if a factory exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Builder for constructing a [`SolverRegistry`]
///
/// The builder pattern allows method chaining and ensures the registry is
/// immutable after construction. Registration detects duplicates and
/// out-of-range year/day combinations.
pub struct RegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver factory with an explicit parts count
    ///
    /// Returns an error if year/day is out of bounds or already registered.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(FactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register all solver plugins collected via `inventory::submit!`
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_runner::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<SolverPlugin>() {
            self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
        }
        Ok(self)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter returns `true`, allowing
    /// selective registration based on tags, year, day, or any other
    /// criteria.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_runner::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2022)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
pub struct SolverRegistry {
    storage: SolverStorage,
}

impl SolverRegistry {
    /// Get readonly access to the factory storage for iteration/lookup
    pub fn storage(&self) -> &SolverStorage {
        &self.storage
    }

    /// Create a solver instance by invoking the factory for a specific year/day
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `input` - The input string for the problem
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// This is the type-erased interface used by the plugin system. Unlike
/// [`crate::Solver`] it has no associated types, so instances of different
/// solver types can be collected in a single container.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;
}

/// Blanket implementation of RegisterableSolver for all Solver types
///
/// Allows any type implementing `Solver` to work with the plugin system
/// without further ceremony.
impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_factory(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Holds metadata about a solver plugin: its year, day, a type-erased solver
/// instance, and optional tags for filtering. Instances are normally produced
/// by the `#[derive(AutoRegisterSolver)]` macro.
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "grid", "bfs", "2022")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
