use crate::molecule::Structure;
use ahash::AHashMap;

/// A named species from the dictionary, with every structure listed for it
#[derive(Debug, Clone)]
pub struct Species {
    pub name: String,
    pub structures: Vec<Structure>,
}
impl Species {
    pub fn new(name: String, structures: Vec<Structure>) -> Self {
        Self { name, structures }
    }
    /// The structure used for labels and pictures
    pub fn primary(&self) -> Option<&Structure> {
        self.structures.first()
    }
}

/// Species in dictionary order, with lookup by name
#[derive(Debug, Clone, Default)]
pub struct SpeciesDictionary {
    species: Vec<Species>,
    index: AHashMap<String, usize>,
}
impl SpeciesDictionary {
    pub fn new() -> Self {
        Self::default()
    }
    /// Add a species, returning false if one with the same name is already present
    pub fn insert(&mut self, species: Species) -> bool {
        if self.index.contains_key(&species.name) {
            return false;
        }
        self.index.insert(species.name.clone(), self.species.len());
        self.species.push(species);
        true
    }
    pub fn get(&self, name: &str) -> Option<&Species> {
        self.index.get(name).map(|&i| &self.species[i])
    }
    pub fn len(&self) -> usize {
        self.species.len()
    }
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Species> {
        self.species.iter()
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.species.iter().map(|s| s.name.as_str())
    }
}
impl<'a> IntoIterator for &'a SpeciesDictionary {
    type Item = &'a Species;
    type IntoIter = std::slice::Iter<'a, Species>;

    fn into_iter(self) -> Self::IntoIter {
        self.species.iter()
    }
}
impl FromIterator<Species> for SpeciesDictionary {
    fn from_iter<I: IntoIterator<Item = Species>>(iter: I) -> Self {
        let mut out = Self::new();
        for s in iter {
            out.insert(s);
        }
        out
    }
}
