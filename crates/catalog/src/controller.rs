//! Filter state controller.
//!
//! `FilterState` is the reducer (commands in, events out, events applied);
//! `CatalogController` owns one for a catalog page together with the product
//! set, the option provider and the sidebar layout, and keeps the derived
//! `CatalogView` in step with every committed transition.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use paintshop_core::{DomainError, DomainResult, StateMachine};
use paintshop_events::{Event, EventBus, EventEnvelope, InMemoryEventBus, Subscription, execute};

use crate::facet::{Facet, FacetValue};
use crate::options::{OptionProvider, StaticOptions};
use crate::predicate;
use crate::price::{PriceBounds, PriceRange};
use crate::product::Product;
use crate::selection::FilterSelection;
use crate::sidebar::SidebarLayout;
use crate::view::{self, CatalogView, OptionCount};

/// Stream name on which selection changes are published.
pub const FILTER_STREAM: &str = "catalog.filter";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterCommand {
    /// Select a value; selecting the active value clears the facet.
    SetFacet(FacetValue),
    ClearFacet(Facet),
    ClearAll,
    /// Swap in a whole selection (e.g. decoded from a URL).
    Replace(FilterSelection),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterEvent {
    FacetSelected(FacetValue),
    FacetCleared(Facet),
    SelectionCleared,
    SelectionReplaced(FilterSelection),
}

impl Event for FilterEvent {
    fn event_type(&self) -> &'static str {
        match self {
            FilterEvent::FacetSelected(_) => "catalog.filter.facet_selected",
            FilterEvent::FacetCleared(_) => "catalog.filter.facet_cleared",
            FilterEvent::SelectionCleared => "catalog.filter.selection_cleared",
            FilterEvent::SelectionReplaced(_) => "catalog.filter.selection_replaced",
        }
    }
}

/// Filter selection reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    selection: FilterSelection,
    bounds: PriceBounds,
    version: u64,
}

impl FilterState {
    pub fn new(bounds: PriceBounds) -> Self {
        Self {
            selection: FilterSelection::new(),
            bounds,
            version: 0,
        }
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    fn ensure_within_bounds(&self, range: PriceRange) -> DomainResult<()> {
        if !range.is_within(self.bounds) {
            return Err(DomainError::invalid_argument(format!(
                "price range {range} outside catalog bounds [{}, {}]",
                self.bounds.min(),
                self.bounds.max()
            )));
        }
        Ok(())
    }

    fn decide_set(&self, value: &FacetValue) -> DomainResult<Vec<FilterEvent>> {
        if let FacetValue::Price(range) = value {
            self.ensure_within_bounds(*range)?;
        }

        if self.selection.is_selected(value) {
            Ok(vec![FilterEvent::FacetCleared(value.facet())])
        } else {
            Ok(vec![FilterEvent::FacetSelected(value.clone())])
        }
    }

    fn decide_clear(&self, facet: Facet) -> Vec<FilterEvent> {
        if self.selection.is_set(facet) {
            vec![FilterEvent::FacetCleared(facet)]
        } else {
            Vec::new()
        }
    }

    /// One event for the whole swap, none when nothing would change.
    fn decide_replace(&self, target: &FilterSelection) -> DomainResult<Vec<FilterEvent>> {
        if let Some(range) = target.price_range() {
            self.ensure_within_bounds(range)?;
        }
        if *target == self.selection {
            return Ok(Vec::new());
        }
        Ok(vec![FilterEvent::SelectionReplaced(target.clone())])
    }

    /// One event for the whole reset, none when already empty.
    fn decide_clear_all(&self) -> Vec<FilterEvent> {
        if self.selection.is_empty() {
            Vec::new()
        } else {
            vec![FilterEvent::SelectionCleared]
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(PriceBounds::default())
    }
}

impl StateMachine for FilterState {
    type Command = FilterCommand;
    type Event = FilterEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        self.selection = match event {
            FilterEvent::FacetSelected(value) => self.selection.clone().with(value.clone()),
            FilterEvent::FacetCleared(facet) => self.selection.clone().without(*facet),
            FilterEvent::SelectionCleared => FilterSelection::new(),
            FilterEvent::SelectionReplaced(target) => target.clone(),
        };
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            FilterCommand::SetFacet(value) => self.decide_set(value),
            FilterCommand::ClearFacet(facet) => Ok(self.decide_clear(*facet)),
            FilterCommand::ClearAll => Ok(self.decide_clear_all()),
            FilterCommand::Replace(target) => self.decide_replace(target),
        }
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Published after every committed transition: the change plus the complete
/// state it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionChanged {
    pub event: FilterEvent,
    pub selection: FilterSelection,
    pub view: CatalogView,
}

pub type SelectionBus = InMemoryEventBus<EventEnvelope<SelectionChanged>>;

/// Catalog page controller: the whole surface the rendering layer talks to.
#[derive(Debug)]
pub struct CatalogController<P = StaticOptions> {
    catalog: Vec<Product>,
    options: P,
    state: FilterState,
    view: CatalogView,
    sidebar: SidebarLayout,
    bus: Option<Arc<SelectionBus>>,
}

impl<P: OptionProvider> CatalogController<P> {
    /// Every facet starts unset.
    pub fn new(catalog: Vec<Product>, options: P) -> Self {
        let state = FilterState::new(options.price_bounds());
        let view = view::recompute(&catalog, state.selection());
        Self {
            catalog,
            options,
            state,
            view,
            sidebar: SidebarLayout::default(),
            bus: None,
        }
    }

    /// Publish a `SelectionChanged` envelope on `bus` after each transition.
    pub fn with_bus(mut self, bus: Arc<SelectionBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn subscribe(&self) -> Option<Subscription<EventEnvelope<SelectionChanged>>> {
        self.bus.as_ref().map(|bus| bus.subscribe())
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn options(&self) -> &P {
        &self.options
    }

    pub fn selection(&self) -> &FilterSelection {
        self.state.selection()
    }

    pub fn version(&self) -> u64 {
        self.state.version()
    }

    pub fn active_facet_count(&self) -> usize {
        self.state.selection().active_facet_count()
    }

    pub fn catalog_view(&self) -> CatalogView {
        self.view
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        predicate::filter(&self.catalog, self.state.selection()).collect()
    }

    /// Live counts for the provider's options of `facet`, in provider order.
    /// Options absent from the catalog get a count of zero.
    pub fn option_counts(&self, facet: Facet) -> Vec<OptionCount> {
        let present = view::option_counts(&self.catalog, self.state.selection(), facet);
        self.options
            .values(facet)
            .into_iter()
            .map(|value| {
                let count = present
                    .iter()
                    .find(|oc| oc.value == value)
                    .map_or(0, |oc| oc.count);
                OptionCount {
                    selected: self.state.selection().is_selected(&value),
                    value,
                    count,
                }
            })
            .collect()
    }

    /// Active filters with their display labels, for removable chips.
    pub fn active_filters(&self) -> Vec<(FacetValue, String)> {
        self.state
            .selection()
            .values()
            .into_iter()
            .map(|value| {
                let label = self
                    .options
                    .display_name_for(&value)
                    .unwrap_or_else(|| value.to_string());
                (value, label)
            })
            .collect()
    }

    pub fn sidebar(&self) -> &SidebarLayout {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut SidebarLayout {
        &mut self.sidebar
    }

    /// Toggle-to-clear selection of `value`.
    pub fn set_facet(&mut self, value: FacetValue) -> DomainResult<&FilterSelection> {
        let command = FilterCommand::SetFacet(value);
        let events = execute(&mut self.state, &command).inspect_err(|e| {
            tracing::debug!(error = %e, ?command, "rejected filter command");
        })?;
        self.commit(events);
        Ok(self.state.selection())
    }

    /// String boundary for `set_facet`: `name` is a facet name, `raw` a slug
    /// or a `MIN-MAX` price range.
    pub fn set_facet_by_name(&mut self, name: &str, raw: &str) -> DomainResult<&FilterSelection> {
        let value = name
            .parse::<Facet>()
            .and_then(|facet| FacetValue::parse(facet, raw))
            .inspect_err(|e| tracing::debug!(error = %e, name, raw, "rejected filter input"))?;
        self.set_facet(value)
    }

    pub fn clear_facet(&mut self, facet: Facet) -> &FilterSelection {
        let events = self.state.decide_clear(facet);
        self.apply_and_commit(events);
        self.state.selection()
    }

    /// Reset every facet in a single transition.
    pub fn clear_all(&mut self) -> &FilterSelection {
        let events = self.state.decide_clear_all();
        self.apply_and_commit(events);
        self.state.selection()
    }

    /// Replace the whole selection (e.g. decoded from a URL) in a single
    /// transition; observers never see a partially restored selection.
    pub fn restore(&mut self, selection: &FilterSelection) -> DomainResult<&FilterSelection> {
        let command = FilterCommand::Replace(selection.clone());
        let events = execute(&mut self.state, &command).inspect_err(|e| {
            tracing::debug!(error = %e, "rejected selection restore");
        })?;
        self.commit(events);
        Ok(self.state.selection())
    }

    fn apply_and_commit(&mut self, events: Vec<FilterEvent>) {
        for event in &events {
            self.state.apply(event);
        }
        self.commit(events);
    }

    /// Recompute the view and publish; `events` are already applied.
    fn commit(&mut self, events: Vec<FilterEvent>) {
        if events.is_empty() {
            return;
        }

        self.view = view::recompute(&self.catalog, self.state.selection());

        let first_seq = self.state.version() + 1 - events.len() as u64;
        for (offset, event) in events.into_iter().enumerate() {
            let sequence_number = first_seq + offset as u64;
            tracing::debug!(
                event = event.event_type(),
                version = sequence_number,
                filtered = self.view.filtered_count,
                total = self.view.total_count,
                "filter selection changed"
            );

            if let Some(bus) = &self.bus {
                let message = SelectionChanged {
                    event,
                    selection: self.state.selection().clone(),
                    view: self.view,
                };
                let envelope = EventEnvelope::new(FILTER_STREAM, sequence_number, Utc::now(), message);
                if let Err(e) = bus.publish(envelope) {
                    tracing::warn!(error = %e, "failed to publish selection change");
                }
            }
        }
    }
}
