//! Section registry: a minimal windowing system.
//!
//! Each section is a simulated draggable document window bound to a piece of
//! static content. State machine per section:
//! `Closed -> Open(normal | minimized | maximized)`.

use crate::error::{Error, Result};

/// Pinned top-left offset used while a section is maximized.
pub const MAXIMIZED_ORIGIN: (i32, i32) = (10, 10);

/// Window state of a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowState {
    /// Not shown.
    #[default]
    Closed,
    /// Open, free-floating.
    Normal,
    /// Open but collapsed into the dock.
    Minimized,
    /// Open, pinned full-size at [`MAXIMIZED_ORIGIN`].
    Maximized,
}

impl WindowState {
    /// Check if the section is open in any form.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// One simulated document window.
#[derive(Clone, Debug)]
pub struct Section {
    id: &'static str,
    display_name: &'static str,
    aliases: &'static [&'static str],
    state: WindowState,
    position: (i32, i32),
    /// Free-floating position remembered while maximized; restoring returns
    /// here without re-clamping.
    floating_position: (i32, i32),
    z_index: u32,
}

impl Section {
    fn new(
        id: &'static str,
        display_name: &'static str,
        aliases: &'static [&'static str],
        position: (i32, i32),
    ) -> Self {
        Self {
            id,
            display_name,
            aliases,
            state: WindowState::Closed,
            position,
            floating_position: position,
            z_index: 0,
        }
    }

    /// Stable section identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id
    }

    /// Name shown in listings and window chrome (e.g. `about.txt`).
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name
    }

    /// Current window state.
    #[must_use]
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Current top-left position.
    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    /// Current stacking order; higher is in front.
    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// Update the free-floating position (host drag handler).
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.position = (x, y);
        if self.state != WindowState::Maximized {
            self.floating_position = (x, y);
        }
    }
}

/// What a minimize/maximize call did, for handler phrasing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Entered the requested state.
    Engaged,
    /// Toggled back out of it.
    Restored,
}

/// Result of a fuzzy section lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionMatch {
    /// A single best match by the ranked rules.
    Found(&'static str),
    /// Nothing matched; carries the known ids for a suggestion line.
    NotFound { suggestions: Vec<String> },
}

/// Registry of all known sections and their window state.
#[derive(Clone, Debug)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    max_z: u32,
}

impl SectionRegistry {
    /// Build a registry from section definitions in declaration order.
    #[must_use]
    pub fn new(
        definitions: &[(&'static str, &'static str, &'static [&'static str], (i32, i32))],
    ) -> Self {
        Self {
            sections: definitions
                .iter()
                .map(|(id, name, aliases, pos)| Section::new(id, name, aliases, *pos))
                .collect(),
            max_z: 0,
        }
    }

    /// The demo portfolio section set, in declaration order.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::new(&[
            ("about", "about.txt", &["bio", "me", "resume"], (100, 100)),
            ("skills", "skills.json", &["skill", "tech", "technologies"], (150, 150)),
            ("experience", "experience.log", &["exp", "work", "jobs", "career"], (200, 200)),
            ("projects", "projects/", &["proj", "project", "portfolio"], (250, 250)),
            ("contact", "contact.info", &["info", "email", "reach"], (300, 300)),
        ])
    }

    /// All sections in declaration order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Look up a section by exact id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Section> {
        self.sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Error::SectionNotFound(id.to_string()))
    }

    /// Ranked fuzzy match: alias, exact id, exact display name, substring
    /// id, substring display name. The first tier with a hit wins; within a
    /// tier, the first declared section wins.
    #[must_use]
    pub fn find(&self, query: &str) -> SectionMatch {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.not_found();
        }

        let tiers: [&dyn Fn(&Section) -> bool; 5] = [
            &|s: &Section| s.aliases.contains(&query.as_str()),
            &|s: &Section| s.id == query,
            &|s: &Section| s.display_name.to_lowercase() == query,
            &|s: &Section| s.id.contains(&query),
            &|s: &Section| s.display_name.to_lowercase().contains(&query),
        ];
        for tier in tiers {
            if let Some(section) = self.sections.iter().find(|s| tier(s)) {
                return SectionMatch::Found(section.id);
            }
        }
        self.not_found()
    }

    fn not_found(&self) -> SectionMatch {
        SectionMatch::NotFound {
            suggestions: self.sections.iter().map(|s| s.id.to_string()).collect(),
        }
    }

    /// Open a section (restoring from minimized/maximized to normal) and
    /// bring it to the front.
    pub fn open(&mut self, id: &str) -> Result<()> {
        let z = self.next_z();
        let section = self.get_mut(id)?;
        section.state = WindowState::Normal;
        section.position = section.floating_position;
        section.z_index = z;
        Ok(())
    }

    /// Close a section. Position and z-order are forgotten until reopened.
    pub fn close(&mut self, id: &str) -> Result<()> {
        let section = self.get_mut(id)?;
        section.state = WindowState::Closed;
        section.position = section.floating_position;
        Ok(())
    }

    /// Toggle minimized state. Minimizing from maximized keeps the pinned
    /// position until restore.
    pub fn minimize(&mut self, id: &str) -> Result<Transition> {
        let section = self.get_mut(id)?;
        match section.state {
            WindowState::Minimized => {
                section.state = WindowState::Normal;
                Ok(Transition::Restored)
            }
            WindowState::Normal | WindowState::Maximized => {
                section.state = WindowState::Minimized;
                Ok(Transition::Engaged)
            }
            WindowState::Closed => Err(Error::SectionNotFound(id.to_string())),
        }
    }

    /// Toggle maximized state. Entering pins the position to
    /// [`MAXIMIZED_ORIGIN`]; restoring returns to the last free-floating
    /// position unchanged. Also brings the section to the front.
    pub fn maximize(&mut self, id: &str) -> Result<Transition> {
        let z = self.next_z();
        let section = self.get_mut(id)?;
        let transition = match section.state {
            WindowState::Maximized => {
                section.state = WindowState::Normal;
                section.position = section.floating_position;
                Transition::Restored
            }
            WindowState::Normal => {
                section.floating_position = section.position;
                section.state = WindowState::Maximized;
                section.position = MAXIMIZED_ORIGIN;
                Transition::Engaged
            }
            WindowState::Minimized | WindowState::Closed => {
                return Err(Error::SectionNotFound(id.to_string()));
            }
        };
        section.z_index = z;
        Ok(transition)
    }

    /// Bring a section to the front regardless of its state.
    ///
    /// Always assigns `current_max + 1`, so at most one section holds the
    /// maximum z-index at a time.
    pub fn focus(&mut self, id: &str) -> Result<u32> {
        let z = self.next_z();
        let section = self.get_mut(id)?;
        section.z_index = z;
        Ok(z)
    }

    fn next_z(&mut self) -> u32 {
        self.max_z += 1;
        self.max_z
    }
}
