//! Listener interface between the browsing components and their owner

/// Receives user intents from the catalog components
///
/// Preview cards call [`on_detail_requested`](Self::on_detail_requested),
/// the detail surface calls [`on_detail_closed`](Self::on_detail_closed) and
/// the search field calls [`on_query_changed`](Self::on_query_changed). The
/// components never mutate state themselves.
pub trait CatalogListener {
    /// The full version list of `name` was requested
    fn on_detail_requested(&mut self, name: &str);

    /// The detail surface was dismissed
    fn on_detail_closed(&mut self);

    /// The search query changed to `query`
    fn on_query_changed(&mut self, query: &str);
}
