//! In-memory program library.
//!
//! Holds the user's programs for the lifetime of the process and computes
//! the summary card fields (duration label, exercise count, calorie
//! estimate) whenever a structure is created or updated. There is no
//! persistence; the library is rebuilt from the built-in catalog on start.

use crate::error::{Error, Result};
use crate::timeline;
use crate::types::{Program, ProgramStructure};
use uuid::Uuid;

/// Calorie estimate used when none is configured, in kcal per minute of
/// active exercise
pub const DEFAULT_KCAL_PER_ACTIVE_MINUTE: f64 = 9.0;

/// Ordered collection of programs, newest first
#[derive(Clone, Debug)]
pub struct ProgramLibrary {
    programs: Vec<Program>,
    kcal_per_active_minute: f64,
}

impl Default for ProgramLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgramLibrary {
    pub fn new() -> Self {
        Self::with_kcal_rate(DEFAULT_KCAL_PER_ACTIVE_MINUTE)
    }

    pub fn with_kcal_rate(kcal_per_active_minute: f64) -> Self {
        Self {
            programs: Vec::new(),
            kcal_per_active_minute,
        }
    }

    pub fn with_programs(mut self, programs: Vec<Program>) -> Self {
        self.programs = programs;
        self
    }

    /// Summarize a structure and add it as a new program at the front
    pub fn create(&mut self, structure: ProgramStructure) -> &Program {
        let program = self.summarize(Uuid::new_v4(), structure);
        tracing::info!("Created program '{}'", program.name);
        self.programs.insert(0, program);
        &self.programs[0]
    }

    /// Replace an existing program's structure, recomputing its summary
    pub fn update(&mut self, id: Uuid, structure: ProgramStructure) -> Result<&Program> {
        let pos = self
            .programs
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::ProgramNotFound(id))?;

        self.programs[pos] = self.summarize(id, structure);
        tracing::info!("Updated program '{}'", self.programs[pos].name);
        Ok(&self.programs[pos])
    }

    /// Clone a program under a fresh id, name suffixed with " (copy)".
    ///
    /// Programs without a structure have nothing to duplicate.
    pub fn duplicate(&mut self, id: Uuid) -> Result<&Program> {
        let source = self.get(id).ok_or(Error::ProgramNotFound(id))?;
        let structure = source
            .structure
            .clone()
            .ok_or_else(|| Error::Other(format!("program '{}' has no structure", source.name)))?;

        let mut copy = self.summarize(Uuid::new_v4(), structure);
        copy.name = format!("{} (copy)", source.name);
        self.programs.insert(0, copy);
        Ok(&self.programs[0])
    }

    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.programs.len();
        self.programs.retain(|p| p.id != id);
        if self.programs.len() == before {
            return Err(Error::ProgramNotFound(id));
        }
        Ok(())
    }

    pub fn get(&self, id: Uuid) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    /// Case-insensitive name lookup, first match wins
    pub fn find_by_name(&self, name: &str) -> Option<&Program> {
        self.programs
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter()
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    fn summarize(&self, id: Uuid, structure: ProgramStructure) -> Program {
        let total = timeline::total_secs(&structure);
        let active = timeline::active_secs(&structure);
        let calories =
            (active as f64 / 60.0 * self.kcal_per_active_minute).round() as u32;

        Program {
            id,
            name: structure.name.clone(),
            duration_label: format!("{} min", total / 60),
            exercise_count: timeline::exercise_count(&structure),
            calories,
            structure: Some(structure),
        }
    }
}
