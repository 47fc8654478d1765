use std::collections::HashMap;

use uuid::Uuid;

use crate::directory::domain::Document;

/// Ordered, id-indexed set of documents.
///
/// Lookups go through the id index; `order` keeps insertion order for
/// listing. An upsert of an existing id keeps its original position.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    order: Vec<String>,
    docs: HashMap<String, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { order: Vec::new(), docs: HashMap::new() }
    }
}

impl<T: Document> Collection<T> {
    pub fn new() -> Self { Self::default() }

    /// Rebuild from an ordered list; later duplicates of an id win.
    pub fn from_vec(items: Vec<T>) -> Self {
        let mut c = Self::new();
        for item in items {
            c.upsert(item);
        }
        c
    }

    pub fn len(&self) -> usize { self.order.len() }

    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    pub fn insert_new(&mut self, draft: T::Draft) -> T {
        let mut id = Uuid::new_v4().to_string();
        while self.docs.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }
        let doc = T::from_draft(id, draft);
        self.upsert(doc.clone());
        doc
    }

    pub fn upsert(&mut self, doc: T) -> T {
        let id = doc.id().to_string();
        if self.docs.insert(id.clone(), doc.clone()).is_none() {
            self.order.push(id);
        }
        doc
    }

    pub fn contains(&self, id: &str) -> bool { self.docs.contains_key(id) }

    pub fn get(&self, id: &str) -> Option<T> { self.docs.get(id).cloned() }

    pub fn remove(&mut self, id: &str) -> bool {
        if self.docs.remove(id).is_some() {
            self.order.retain(|k| k != id);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.docs.get(id))
    }

    pub fn to_vec(&self) -> Vec<T> { self.iter().cloned().collect() }

    pub fn window(&self, offset: u64, limit: u64) -> Vec<T> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        self.iter().skip(offset).take(limit).cloned().collect()
    }

    pub fn filter<F>(&self, pred: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|d| pred(d)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::domain::{Company, CompanyDraft};

    fn draft(name: &str) -> CompanyDraft { CompanyDraft { company_name: name.into() } }

    #[test]
    fn keeps_insertion_order_across_upserts() {
        let mut c = Collection::<Company>::new();
        let a = c.insert_new(draft("A"));
        let b = c.insert_new(draft("B"));
        c.upsert(Company { id: a.id.clone(), company_name: "A2".into() });

        let names: Vec<_> = c.iter().map(|x| x.company_name.clone()).collect();
        assert_eq!(names, vec!["A2", "B"]);
        assert_eq!(c.len(), 2);
        assert!(c.contains(&b.id));
    }

    #[test]
    fn remove_drops_from_index_and_order() {
        let mut c = Collection::<Company>::new();
        let a = c.insert_new(draft("A"));
        c.insert_new(draft("B"));
        assert!(c.remove(&a.id));
        assert!(!c.remove(&a.id));
        assert_eq!(c.to_vec().len(), 1);
        assert!(c.get(&a.id).is_none());
    }

    #[test]
    fn window_skips_then_takes() {
        let mut c = Collection::<Company>::new();
        for n in ["C1", "C2", "C3", "C4"] {
            c.insert_new(draft(n));
        }
        let page: Vec<_> = c.window(2, 2).into_iter().map(|x| x.company_name).collect();
        assert_eq!(page, vec!["C3", "C4"]);
        assert!(c.window(10, 2).is_empty());
    }
}
