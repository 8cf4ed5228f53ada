// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Directed, weighted multigraph of towns connected by one-way routes.
// Every town is a `Location` holding its outgoing routes in insertion order.
// Locations live in a fixed-size table indexed by `label - 'A'`; callers go
// through `lookup` and never index the table themselves.
// ──────────────────────────────────────────────────────────────────────────────

/// Number of town slots in a graph. Towns are labelled `A` up to
/// `A + TOWN_CAPACITY - 1`, so the current alphabet is `A`..`E`.
/// Supporting more towns means raising this constant (at most 26).
pub const TOWN_CAPACITY: usize = 5;

/// Index of a location inside its graph's location table.
pub type LocationId = usize;

/// A one-way, weighted connection to another location of the same graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub weight: u32,
    pub destination: LocationId,
}

/// A town and the routes leaving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    label: char,
    routes: Vec<Route>,
}

impl Location {
    fn new(label: char) -> Self {
        Self {
            label,
            routes: Vec::new(),
        }
    }

    pub fn label(&self) -> char {
        self.label
    }

    /// Outgoing routes, in the order they were added.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// Owns every location and route. Immutable once handed to a query engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    locations: Vec<Option<Location>>,
}

impl Graph {
    /// Creates an empty graph with room for `capacity` towns starting at `A`.
    pub fn new(capacity: usize) -> Self {
        Self {
            locations: vec![None; capacity],
        }
    }

    /// Maps a label to its slot, or `None` if it lies outside the alphabet.
    pub fn slot_of(&self, label: char) -> Option<LocationId> {
        if !label.is_ascii_uppercase() {
            return None;
        }
        let slot = (label as u8 - b'A') as usize;
        (slot < self.locations.len()).then_some(slot)
    }

    /// Returns true if `label` is an uppercase letter this graph has room for.
    pub fn supports(&self, label: char) -> bool {
        self.slot_of(label).is_some()
    }

    /// Finds the location labelled `label`, if it is present.
    pub fn lookup(&self, label: char) -> Option<LocationId> {
        let slot = self.slot_of(label)?;
        self.locations[slot].as_ref().map(|_| slot)
    }

    /// Returns the location behind `id`.
    ///
    /// Ids come from `lookup` or from a route destination, both of which
    /// only ever point at occupied slots.
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id).and_then(Option::as_ref)
    }

    /// Label of the location behind `id`, `'?'` for an empty slot.
    pub fn label_of(&self, id: LocationId) -> char {
        self.get(id).map_or('?', Location::label)
    }

    /// Outgoing routes of `id`; empty for unknown ids.
    pub fn routes_from(&self, id: LocationId) -> &[Route] {
        self.get(id).map(Location::routes).unwrap_or_default()
    }

    /// Size of the location table. Per-location scratch arrays use this length.
    pub fn capacity(&self) -> usize {
        self.locations.len()
    }

    /// Iterates over present locations in label order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().flatten()
    }

    /// Number of locations actually present.
    pub fn location_count(&self) -> usize {
        self.locations().count()
    }

    /// Returns the id for `label`, creating the location on first use.
    /// `None` if the label is outside the supported alphabet.
    pub(crate) fn get_or_insert(&mut self, label: char) -> Option<LocationId> {
        let slot = self.slot_of(label)?;
        self.locations[slot].get_or_insert_with(|| Location::new(label));
        Some(slot)
    }

    /// Appends a route to `from`. Both ids must come from `get_or_insert`.
    pub(crate) fn add_route(&mut self, from: LocationId, destination: LocationId, weight: u32) {
        if let Some(location) = self.locations.get_mut(from).and_then(Option::as_mut) {
            location.routes.push(Route {
                weight,
                destination,
            });
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(TOWN_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_alphabet_order() {
        let graph = Graph::default();
        assert_eq!(graph.slot_of('A'), Some(0));
        assert_eq!(graph.slot_of('E'), Some(4));
        assert_eq!(graph.slot_of('F'), None);
        assert_eq!(graph.slot_of('a'), None);
        assert_eq!(graph.slot_of('1'), None);
    }

    #[test]
    fn lookup_only_finds_inserted_locations() {
        let mut graph = Graph::default();
        assert_eq!(graph.lookup('B'), None);
        let b = graph.get_or_insert('B').unwrap();
        assert_eq!(graph.lookup('B'), Some(b));
        assert_eq!(graph.lookup('C'), None);
        assert!(graph.supports('C'));
    }

    #[test]
    fn get_or_insert_is_idempotent() {
        let mut graph = Graph::default();
        let first = graph.get_or_insert('C').unwrap();
        let second = graph.get_or_insert('C').unwrap();
        assert_eq!(first, second);
        assert_eq!(graph.location_count(), 1);
    }

    #[test]
    fn routes_keep_insertion_order_and_duplicates() {
        let mut graph = Graph::default();
        let a = graph.get_or_insert('A').unwrap();
        let b = graph.get_or_insert('B').unwrap();
        graph.add_route(a, b, 5);
        graph.add_route(a, b, 2);

        let weights: Vec<u32> = graph.routes_from(a).iter().map(|r| r.weight).collect();
        assert_eq!(weights, vec![5, 2]);
        assert!(graph.routes_from(b).is_empty());
    }

    #[test]
    fn wider_capacity_accepts_more_towns() {
        let mut graph = Graph::new(26);
        assert!(graph.get_or_insert('Z').is_some());
        assert_eq!(graph.label_of(25), 'Z');
    }
}
