//! The `Dispatcher` — explicit host state with controlled mutation points.

use fr_core::GeoPoint;
use fr_data::{nearest_hydrant, HazardRoad, Hydrant, ProximityResult};
use fr_routing::{RouteCandidate, RouteProvider, RouteSet};
use fr_tracking::{MovementMetrics, MovementTracker, Position, TrackObserver};

use crate::collab::{IncidentRecord, WeatherReading};
use crate::{DispatchConfig, DispatchError};

/// What changed after feeding one position fix.
#[derive(Clone, Debug)]
pub struct PositionUpdate {
    /// Metrics after the sample (speed kept on clock skew, heading kept on
    /// zero displacement — see `fr-tracking`).
    pub metrics: MovementMetrics,

    /// Nearest-hydrant resolution against the new position.
    pub proximity: ProximityResult,

    /// `true` when a destination is set — the caller should re-query its
    /// routing provider from the new position.
    pub route_refresh_needed: bool,
}

/// Owns the mutable dashboard state: current position, movement tracker,
/// route selection, tracking flag, and the loaded reference data.
///
/// All mutation goes through methods; the pure computation lives in the
/// sibling crates.
pub struct Dispatcher {
    config: DispatchConfig,

    hydrants:     Vec<Hydrant>,
    hazard_roads: Vec<HazardRoad>,

    tracker:  MovementTracker,
    tracking: bool,

    /// Latest fix, kept across tracking stop/start (the map still shows the
    /// last known position after tracking is switched off).
    position: Option<Position>,

    destination: Option<GeoPoint>,
    routes:      Option<RouteSet>,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Self {
            config,
            hydrants:     Vec::new(),
            hazard_roads: Vec::new(),
            tracker:      MovementTracker::new(),
            tracking:     false,
            position:     None,
            destination:  None,
            routes:       None,
        }
    }

    // ── Reference data ────────────────────────────────────────────────────

    /// Replace the hydrant and hazard-road snapshots (after an external
    /// store refresh).
    pub fn load_reference_data(&mut self, hydrants: Vec<Hydrant>, hazard_roads: Vec<HazardRoad>) {
        log::info!(
            "reference data: {} hydrants, {} hazard roads",
            hydrants.len(),
            hazard_roads.len()
        );
        self.hydrants = hydrants;
        self.hazard_roads = hazard_roads;
    }

    pub fn hydrants(&self) -> &[Hydrant] {
        &self.hydrants
    }

    pub fn hazard_roads(&self) -> &[HazardRoad] {
        &self.hazard_roads
    }

    // ── Position and tracking ─────────────────────────────────────────────

    /// Feed one position fix: updates movement metrics, re-resolves the
    /// nearest hydrant, and reports whether the active route went stale.
    pub fn position_update(&mut self, sample: Position) -> PositionUpdate {
        let metrics = self.tracker.push(sample);
        self.position = Some(sample);

        let proximity = nearest_hydrant(
            sample.point,
            &self.hydrants,
            self.config.connection_range_feet,
        );

        PositionUpdate {
            metrics,
            proximity,
            route_refresh_needed: self.destination.is_some(),
        }
    }

    /// [`position_update`](Self::position_update) plus observer notification
    /// — the continuous-tracking path.
    pub fn track_sample(
        &mut self,
        sample: Position,
        observer: &mut impl TrackObserver,
    ) -> PositionUpdate {
        let update = self.position_update(sample);
        observer.on_sample(&sample, update.metrics);
        update
    }

    /// Switch continuous tracking on.  Idempotent.
    pub fn start_tracking(&mut self, observer: &mut impl TrackObserver) {
        if self.tracking {
            return;
        }
        self.tracking = true;
        log::info!("tracking started");
        observer.on_tracking_started();
    }

    /// Switch continuous tracking off and reset the tracker, so a later
    /// restart does not derive a teleport speed from the stale fix.
    /// Idempotent.  The last known position is kept.
    pub fn stop_tracking(&mut self, observer: &mut impl TrackObserver) {
        if !self.tracking {
            return;
        }
        self.tracking = false;
        self.tracker.reset();
        log::info!("tracking stopped");
        observer.on_tracking_stopped();
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Latest known fix, if any.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Current movement metrics.
    #[inline]
    pub fn metrics(&self) -> MovementMetrics {
        self.tracker.metrics()
    }

    /// Nearest-hydrant resolution against the latest fix, or `None` before
    /// any fix arrived.
    pub fn nearest_hydrant(&self) -> Option<ProximityResult> {
        self.position.map(|pos| {
            nearest_hydrant(pos.point, &self.hydrants, self.config.connection_range_feet)
        })
    }

    // ── Routes ────────────────────────────────────────────────────────────

    /// Query `provider` for routes from the current position to
    /// `destination` and install the result as the active
    /// [`RouteSet`] (ranked, fastest selected).  Returns the number of
    /// alternatives found.
    pub fn route_to(
        &mut self,
        destination: GeoPoint,
        provider: &impl RouteProvider,
    ) -> Result<usize, DispatchError> {
        let from = self.position.ok_or(DispatchError::NoPosition)?;
        let candidates = provider.routes(from.point, destination)?;
        Ok(self.set_routes(destination, candidates))
    }

    /// Install pre-computed candidates for `destination` as the active set.
    /// Returns the number of alternatives.
    pub fn set_routes(&mut self, destination: GeoPoint, candidates: Vec<RouteCandidate>) -> usize {
        let set = RouteSet::new(candidates);
        let n = set.len();
        log::debug!("route set to {destination}: {n} alternatives");
        self.destination = Some(destination);
        self.routes = Some(set);
        n
    }

    /// Select an alternative by rank index.  Defensive: returns `false`
    /// (previous selection retained) when no set is active or the index is
    /// out of bounds.
    pub fn select_route(&mut self, index: usize) -> bool {
        match self.routes.as_mut() {
            Some(set) => set.select(index),
            None => false,
        }
    }

    /// The active route selection, if any.
    pub fn selected_route(&self) -> Option<&RouteCandidate> {
        self.routes.as_ref().and_then(|set| set.selected())
    }

    /// The active route set, if any.
    pub fn routes(&self) -> Option<&RouteSet> {
        self.routes.as_ref()
    }

    #[inline]
    pub fn destination(&self) -> Option<GeoPoint> {
        self.destination
    }

    /// Drop the destination and route set (incident closed or cancelled).
    pub fn clear_destination(&mut self) {
        self.destination = None;
        self.routes = None;
    }

    // ── Incident reporting ────────────────────────────────────────────────

    /// Assemble an incident report from the selected route and a weather
    /// reading.  Fails with [`DispatchError::NoRouteSelected`] when no route
    /// is active — response time and distance come from the route summary.
    pub fn build_incident_record(
        &self,
        location: &str,
        type_of_occupancy: &str,
        road_condition: &str,
        weather: &WeatherReading,
    ) -> Result<IncidentRecord, DispatchError> {
        let route = self.selected_route().ok_or(DispatchError::NoRouteSelected)?;

        Ok(IncidentRecord {
            location:          location.to_string(),
            type_of_occupancy: type_of_occupancy.to_string(),
            response_time_min: route.duration_min(),
            distance_km:       route.distance_km(),
            temperature_c:     weather.temperature_c,
            humidity_pct:      weather.humidity_pct,
            wind_speed_kmh:    weather.wind_speed_kmh,
            weather_condition: weather.condition.clone(),
            road_condition:    road_condition.to_string(),
        })
    }

    #[inline]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }
}
