use crate::core::models::DirectoryEntry;
use crate::extensions::string::natural_cmp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    /// Directory (insertion) order.
    Unordered,
    NameAsc,
    NameDesc,
}

struct FilterSorter<'a, T: DirectoryEntry> {
    filters: Vec<Box<dyn Fn(&T) -> bool + 'a>>,
    sort: Sort,
}

impl<'a, T: DirectoryEntry> FilterSorter<'a, T> {
    fn new() -> Self {
        Self {
            filters: Vec::new(),
            sort: Sort::Unordered,
        }
    }

    fn push_filter(mut self, pred: impl Fn(&T) -> bool + 'a) -> Self {
        self.filters.push(Box::new(pred));
        self
    }

    fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    fn apply<'b>(&self, items: &'b [T]) -> Vec<&'b T> {
        let mut out: Vec<&T> = items
            .iter()
            .filter(|e| self.filters.iter().all(|f| f(e)))
            .collect();

        match self.sort {
            Sort::Unordered => {}
            Sort::NameAsc => out.sort_by(|a, b| natural_cmp(a.name(), b.name())),
            Sort::NameDesc => out.sort_by(|a, b| natural_cmp(b.name(), a.name())),
        }
        out
    }
}

/// Ordered registry of uniquely named entries.
#[derive(Debug, Clone)]
pub struct Directory<T: DirectoryEntry> {
    items: Vec<T>,
}

impl<T: DirectoryEntry> Default for Directory<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: DirectoryEntry> Directory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.items.iter().position(|e| e.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.position(name).map(|idx| &self.items[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.position(name).map(move |idx| &mut self.items[idx])
    }

    /// Appends the entry. Returns it back when the name is already taken.
    pub fn insert(&mut self, entity: T) -> std::result::Result<&T, T> {
        if self.contains(entity.name()) {
            return Err(entity);
        }
        self.items.push(entity);
        Ok(&self.items[self.items.len() - 1])
    }

    pub fn remove(&mut self, name: &str) -> Option<T> {
        self.position(name).map(|idx| self.items.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|e| e.name()).collect()
    }

    pub fn values(&self, sort: Sort) -> Vec<&T> {
        self.query().order(sort).collect()
    }

    pub fn query(&self) -> Query<'_, T> {
        Query::new(&self.items)
    }
}

pub struct Query<'a, T: DirectoryEntry> {
    items: &'a [T],
    fs: FilterSorter<'a, T>,
}

impl<'a, T: DirectoryEntry> Query<'a, T> {
    fn new(items: &'a [T]) -> Self {
        Self {
            items,
            fs: FilterSorter::new(),
        }
    }

    pub fn r#where(mut self, pred: impl Fn(&T) -> bool + 'a) -> Self {
        self.fs = self.fs.push_filter(pred);
        self
    }

    pub fn order(mut self, sort: Sort) -> Self {
        self.fs = self.fs.with_sort(sort);
        self
    }

    pub fn collect(self) -> Vec<&'a T> {
        self.fs.apply(self.items)
    }

    pub fn names(self) -> Vec<&'a str> {
        self.collect().into_iter().map(|e| e.name()).collect()
    }
}
