//! Unit tests for pd-truck.

use pd_core::{AgentId, Tick, TradeId};
use pd_exchange::{
    BidPort, ExchangeError, RequestBook, RequestPort, Trade, TradeResponse, Trader,
};
use pd_material::{Composition, Material, MaterialError};

use crate::{Contract, Truck, TruckConfig, TruckError, TruckPhase, TruckState};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TRUCK:      AgentId = AgentId(1);
const REACTOR:    AgentId = AgentId(7);
const ENRICHMENT: AgentId = AgentId(20);

fn fuel_comp() -> Composition {
    Composition::from([(922350000, 0.05), (922380000, 0.95)])
}

fn config() -> TruckConfig {
    TruckConfig::new("U", "Fuel", 10.0, 3)
}

fn truck() -> Truck {
    Truck::new(TRUCK, config()).unwrap()
}

fn request(commodity: &str, quantity: f64) -> RequestPort {
    RequestPort::new(commodity, Material::new(quantity, fuel_comp()), quantity)
}

/// A book holding the reactor's contract offer and delivery request.
fn reactor_book(quantity: f64) -> RequestBook {
    RequestBook::from_ports([
        (REACTOR, request("Fuel-contract", quantity)),
        (REACTOR, request("Fuel", quantity)),
    ])
}

/// Trade the host would clear for `port`'s first bid.
fn trade_for(port: &BidPort, bidder: AgentId, amount: f64) -> Trade {
    Trade { id: TradeId(0), request: port.bids[0].clone(), bidder, amount }
}

/// Drive `t` from Seeking into AwaitingPickup with a contract from the reactor.
fn contracted(t: &mut Truck, quantity: f64) {
    let ports = t.bid_on_requests(Tick(0), &reactor_book(quantity));
    let trade = trade_for(&ports[0], TRUCK, quantity);
    t.commit_trades(Tick(0), &[trade]).unwrap();
}

/// Deliver the pickup material for the truck's own request.
fn picked_up(t: &mut Truck, quantity: f64) {
    let ports = t.request_material(Tick(1));
    let book = RequestBook::from_ports([(TRUCK, ports[0].clone())]);
    let trade = Trade {
        id:      TradeId(0),
        request: book.requests()[0].clone(),
        bidder:  ENRICHMENT,
        amount:  quantity,
    };
    let material = Material::new(quantity, fuel_comp());
    t.receive_material(Tick(1), vec![TradeResponse { trade, material }]).unwrap();
}

fn arrived(quantity: f64) -> Truck {
    let mut t = truck();
    contracted(&mut t, quantity);
    picked_up(&mut t, quantity);
    for _ in 0..3 {
        t.advance(Tick(2));
    }
    assert_eq!(t.phase(), TruckPhase::Arrived);
    t
}

fn assert_invariants(t: &Truck) {
    assert!(
        !(t.trip_time().is_some() && t.return_trip_time().is_some()),
        "both trip timers running: {:?}",
        t.state()
    );
    assert!(t.inventory().count() <= 1);
    if t.inventory().count() > 0 {
        assert!(t.contractee().is_some(), "loaded without a contract");
    }
    if let Some(trip) = t.trip_time() {
        assert!(trip <= t.total_trip_duration());
    }
    if let Some(ret) = t.return_trip_time() {
        assert!(ret < t.total_trip_duration());
    }
}

// ── TruckState transitions ────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;

    fn contract() -> Contract {
        Contract::new(5.0, fuel_comp(), REACTOR)
    }

    #[test]
    fn default_is_seeking() {
        assert_eq!(TruckState::default(), TruckState::Seeking);
        assert_eq!(TruckState::Seeking.contract(), None);
    }

    #[test]
    fn advance_ignores_idle_phases() {
        for state in [
            TruckState::Seeking,
            TruckState::AwaitingPickup { contract: contract() },
            TruckState::Arrived { contract: contract() },
        ] {
            assert_eq!(state.clone().advanced(3), state);
        }
    }

    #[test]
    fn transporting_reaches_arrived() {
        let s = TruckState::Transporting { contract: contract(), elapsed: 1 };
        let s = s.advanced(3);
        assert_eq!(s.trip_time(3), Some(2));
        let s = s.advanced(3);
        assert_eq!(s, TruckState::Arrived { contract: contract() });
        assert_eq!(s.trip_time(3), Some(3));
    }

    #[test]
    fn returning_resets_in_the_same_step() {
        let s = TruckState::Returning { elapsed: 2 }.advanced(3);
        assert_eq!(s, TruckState::Seeking);
        assert_eq!(s.return_trip_time(), None);
    }

    #[test]
    fn single_tick_trip() {
        let s = TruckState::Transporting { contract: contract(), elapsed: 0 }.advanced(1);
        assert_eq!(s.phase(), TruckPhase::Arrived);
        let s = TruckState::Returning { elapsed: 0 }.advanced(1);
        assert_eq!(s.phase(), TruckPhase::Seeking);
    }

    #[test]
    fn misplaced_transitions_are_noops() {
        assert_eq!(TruckState::Seeking.loaded(), TruckState::Seeking);
        assert_eq!(TruckState::Seeking.unloaded(), TruckState::Seeking);
        let returning = TruckState::Returning { elapsed: 1 };
        assert_eq!(returning.clone().with_contract(contract()), returning);
    }

    #[test]
    fn contract_from_trade_uses_traded_amount() {
        let book = reactor_book(5.0);
        let trade = Trade {
            id:      TradeId(0),
            request: book.requests()[0].clone(),
            bidder:  TRUCK,
            amount:  4.0,
        };
        let c = Contract::from_trade(&trade);
        assert_eq!(c.quantity, 4.0);
        assert_eq!(c.composition, fuel_comp());
        assert_eq!(c.contractee, REACTOR);
    }

    #[test]
    fn phase_labels() {
        assert_eq!(TruckPhase::AwaitingPickup.to_string(), "awaiting_pickup");
        assert_eq!(TruckPhase::Returning.as_str(), "returning");
    }
}

// ── TruckConfig ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod config_tests {
    use super::*;

    fn contract(quantity: f64) -> Contract {
        Contract::new(quantity, fuel_comp(), REACTOR)
    }

    #[test]
    fn plain_config_starts_seeking() {
        assert_eq!(config().initial_state().unwrap(), TruckState::Seeking);
    }

    #[test]
    fn rejects_bad_capacity_and_duration() {
        let mut c = config();
        c.capacity = 0.0;
        assert!(matches!(c.validate(), Err(TruckError::Config(_))));

        let mut c = config();
        c.total_trip_duration = 0;
        assert!(matches!(c.validate(), Err(TruckError::Config(_))));
    }

    #[test]
    fn contract_override_awaits_pickup() {
        let state = TruckConfig { contract: Some(contract(5.0)), ..config() }.initial_state().unwrap();
        assert_eq!(state, TruckState::AwaitingPickup { contract: contract(5.0) });
    }

    #[test]
    fn trip_time_override() {
        let c = TruckConfig { contract: Some(contract(5.0)), trip_time: Some(1), ..config() };
        assert_eq!(c.initial_state().unwrap().trip_time(3), Some(1));

        let c = TruckConfig { contract: Some(contract(5.0)), trip_time: Some(3), ..config() };
        assert_eq!(c.initial_state().unwrap().phase(), TruckPhase::Arrived);
    }

    #[test]
    fn trip_time_without_contract_rejected() {
        assert!(TruckConfig { trip_time: Some(1), ..config() }.validate().is_err());
    }

    #[test]
    fn both_timers_rejected() {
        let c = TruckConfig {
            contract:         Some(contract(5.0)),
            trip_time:        Some(1),
            return_trip_time: Some(1),
            ..config()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn return_override() {
        let state = TruckConfig { return_trip_time: Some(2), ..config() }.initial_state().unwrap();
        assert_eq!(state, TruckState::Returning { elapsed: 2 });
        assert!(TruckConfig { return_trip_time: Some(3), ..config() }.validate().is_err());
    }

    #[test]
    fn oversized_contract_rejected() {
        assert!(TruckConfig { contract: Some(contract(11.0)), ..config() }.validate().is_err());
    }

    #[test]
    fn loaded_override_fills_inventory() {
        let c = TruckConfig { contract: Some(contract(5.0)), trip_time: Some(2), ..config() };
        let t = Truck::new(TRUCK, c).unwrap();
        assert_eq!(t.inventory().count(), 1);
        assert_eq!(t.inventory().quantity(), 5.0);
        assert_invariants(&t);
    }

    #[test]
    fn zero_contract_rejected() {
        let c = TruckConfig { contract: Some(contract(0.0)), ..config() };
        assert!(matches!(c.validate(), Err(TruckError::Config(_))));
        assert!(Truck::new(TRUCK, c).is_err());
    }

    #[test]
    fn arrived_override_delivers_immediately() {
        let c = TruckConfig { contract: Some(contract(5.0)), trip_time: Some(3), ..config() };
        let mut t = Truck::new(TRUCK, c).unwrap();
        assert_eq!(t.phase(), TruckPhase::Arrived);
        assert_eq!(t.trip_time(), Some(3));
        assert_eq!(t.inventory().quantity(), 5.0);
        assert_invariants(&t);

        t.advance(Tick(0));
        assert_eq!(t.phase(), TruckPhase::Arrived);

        let ports = t.bid_on_requests(Tick(0), &reactor_book(5.0));
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].bids[0].requester, REACTOR);
        let trade = trade_for(&ports[0], TRUCK, 5.0);
        let responses = t.commit_trades(Tick(0), &[trade]).unwrap();

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].material, Material::new(5.0, fuel_comp()));
        assert_eq!(t.phase(), TruckPhase::Returning);
        assert!(t.inventory().is_empty());
        assert_invariants(&t);
    }

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "source_commodity": "U",
            "dest_commodity": "Fuel",
            "capacity": 10.0,
            "total_trip_duration": 3,
            "contract": {
                "quantity": 5.0,
                "composition": { "922350000": 0.05, "922380000": 0.95 },
                "contractee": 7
            }
        }"#;
        let c: TruckConfig = serde_json::from_str(json).unwrap();
        assert_eq!(c.total_trip_duration, 3);
        assert_eq!(c.contract, Some(contract(5.0)));
        assert_eq!(c.trip_time, None);
    }
}

// ── Exchange hooks per phase ──────────────────────────────────────────────────

#[cfg(test)]
mod hook_tests {
    use super::*;

    #[test]
    fn seeking_requests_nothing() {
        assert!(truck().request_material(Tick(0)).is_empty());
    }

    #[test]
    fn seeking_fans_out_over_every_offer() {
        let book = RequestBook::from_ports([
            (REACTOR, request("Fuel-contract", 5.0)),
            (AgentId(8), request("Fuel-contract", 4.0)),
            (AgentId(9), request("Water-contract", 4.0)),
        ]);
        let ports = truck().bid_on_requests(Tick(0), &book);
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].capacity, 10.0);
        let requesters: Vec<_> = ports[0].bids.iter().map(|r| r.requester).collect();
        assert_eq!(requesters, vec![REACTOR, AgentId(8)]);
    }

    #[test]
    fn seeking_ignores_unrelated_demand() {
        let book = RequestBook::from_ports([(REACTOR, request("Water", 5.0))]);
        assert!(truck().bid_on_requests(Tick(0), &book).is_empty());
    }

    #[test]
    fn seeking_without_offers_does_not_bid() {
        let book = RequestBook::from_ports([(REACTOR, request("Fuel", 5.0))]);
        assert!(truck().bid_on_requests(Tick(0), &book).is_empty());
    }

    #[test]
    fn contract_recorded_on_commit() {
        let mut t = truck();
        contracted(&mut t, 5.0);
        assert_eq!(t.phase(), TruckPhase::AwaitingPickup);
        assert_eq!(t.contractee(), Some(REACTOR));
        assert_eq!(t.contract().map(|c| c.quantity), Some(5.0));
        assert_invariants(&t);
    }

    #[test]
    fn last_contract_wins() {
        let book = RequestBook::from_ports([
            (REACTOR, request("Fuel-contract", 5.0)),
            (AgentId(8), request("Fuel-contract", 4.0)),
        ]);
        let ports = truck().bid_on_requests(Tick(0), &book);
        let trades: Vec<Trade> = ports[0]
            .bids
            .iter()
            .enumerate()
            .map(|(i, r)| Trade {
                id:      TradeId(i as u32),
                request: r.clone(),
                bidder:  TRUCK,
                amount:  r.target.quantity,
            })
            .collect();

        let mut t = truck();
        let responses = t.commit_trades(Tick(0), &trades).unwrap();
        assert!(responses.is_empty());
        assert_eq!(t.contractee(), Some(AgentId(8)));
        assert_eq!(t.contract().map(|c| c.quantity), Some(4.0));
    }

    #[test]
    fn awaiting_pickup_requests_contract_material() {
        let mut t = truck();
        contracted(&mut t, 5.0);
        let ports = t.request_material(Tick(1));
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].commodity, "U");
        assert_eq!(ports[0].target, Material::new(5.0, fuel_comp()));
        assert_eq!(ports[0].capacity, 10.0);
    }

    #[test]
    fn committed_but_not_ready_never_bids() {
        let book = reactor_book(5.0);
        let mut t = truck();
        contracted(&mut t, 5.0);
        assert!(t.bid_on_requests(Tick(1), &book).is_empty());

        picked_up(&mut t, 5.0);
        for tick in 2..4 {
            assert_eq!(t.phase(), TruckPhase::Transporting);
            assert!(t.bid_on_requests(Tick(tick), &book).is_empty());
            assert!(t.request_material(Tick(tick)).is_empty());
            t.advance(Tick(tick));
        }
    }

    #[test]
    fn pickup_starts_the_trip() {
        let mut t = truck();
        contracted(&mut t, 5.0);
        picked_up(&mut t, 5.0);
        assert_eq!(t.phase(), TruckPhase::Transporting);
        assert_eq!(t.trip_time(), Some(0));
        assert_eq!(t.inventory().count(), 1);
        assert!(t.request_material(Tick(1)).is_empty());
        assert_invariants(&t);
    }

    #[test]
    fn empty_responses_leave_pickup_pending() {
        let mut t = truck();
        contracted(&mut t, 5.0);
        t.receive_material(Tick(1), vec![]).unwrap();
        assert_eq!(t.phase(), TruckPhase::AwaitingPickup);
    }

    #[test]
    fn arrived_bids_only_for_contractee() {
        let t = arrived(5.0);
        let book = RequestBook::from_ports([
            (AgentId(8), request("Fuel", 5.0)),
            (REACTOR, request("Fuel", 5.0)),
            (AgentId(9), request("Fuel", 5.0)),
        ]);
        let ports = t.bid_on_requests(Tick(5), &book);
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].bids.len(), 1);
        assert_eq!(ports[0].bids[0].requester, REACTOR);
        assert_eq!(ports[0].capacity, 5.0);
    }

    #[test]
    fn arrived_without_contractee_request_does_not_bid() {
        let t = arrived(5.0);
        let book = RequestBook::from_ports([(AgentId(8), request("Fuel", 5.0))]);
        assert!(t.bid_on_requests(Tick(5), &book).is_empty());

        // Only the contract bucket present: no delivery bucket to search.
        let book = RequestBook::from_ports([(REACTOR, request("Fuel-contract", 5.0))]);
        assert!(t.bid_on_requests(Tick(5), &book).is_empty());
    }

    #[test]
    fn arrived_waits_when_no_trade_clears() {
        let mut t = arrived(5.0);
        assert!(t.commit_trades(Tick(5), &[]).unwrap().is_empty());
        assert_eq!(t.phase(), TruckPhase::Arrived);
        assert_eq!(t.inventory().count(), 1);
    }

    #[test]
    fn delivery_ships_cargo_and_starts_return() {
        let mut t = arrived(5.0);
        let ports = t.bid_on_requests(Tick(5), &reactor_book(5.0));
        let trade = trade_for(&ports[0], TRUCK, 5.0);
        let responses = t.commit_trades(Tick(5), &[trade.clone()]).unwrap();

        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].trade, trade);
        assert_eq!(responses[0].material, Material::new(5.0, fuel_comp()));
        assert_eq!(t.phase(), TruckPhase::Returning);
        assert_eq!(t.return_trip_time(), Some(0));
        assert_eq!(t.contract(), None);
        assert!(t.inventory().is_empty());
        assert_invariants(&t);
    }

    #[test]
    fn second_delivery_trade_is_fatal() {
        let mut t = arrived(5.0);
        let ports = t.bid_on_requests(Tick(5), &reactor_book(5.0));
        let trade = trade_for(&ports[0], TRUCK, 5.0);
        let err = t.commit_trades(Tick(5), &[trade.clone(), trade]).unwrap_err();
        assert!(matches!(err, ExchangeError::Material(MaterialError::Empty)));

        // Nothing was shipped: the cargo and contract are still aboard.
        assert_eq!(t.phase(), TruckPhase::Arrived);
        assert_eq!(t.inventory().count(), 1);
        assert_eq!(t.inventory().quantity(), 5.0);
        assert_eq!(t.contractee(), Some(REACTOR));
    }

    #[test]
    fn returning_ignores_the_exchange() {
        let mut t = Truck::new(TRUCK, TruckConfig { return_trip_time: Some(0), ..config() }).unwrap();
        let book = reactor_book(5.0);
        assert!(t.request_material(Tick(0)).is_empty());
        assert!(t.bid_on_requests(Tick(0), &book).is_empty());

        let trade = Trade {
            id:      TradeId(0),
            request: book.requests()[0].clone(),
            bidder:  TRUCK,
            amount:  5.0,
        };
        assert!(t.commit_trades(Tick(0), &[trade.clone()]).unwrap().is_empty());
        let material = Material::new(5.0, fuel_comp());
        t.receive_material(Tick(0), vec![TradeResponse { trade, material }]).unwrap();

        assert_eq!(t.phase(), TruckPhase::Returning);
        assert!(t.inventory().is_empty());
        assert_eq!(t.contract(), None);
    }

    #[test]
    fn material_while_seeking_is_dropped() {
        let mut t = truck();
        let book = reactor_book(5.0);
        let trade = Trade {
            id:      TradeId(0),
            request: book.requests()[1].clone(),
            bidder:  ENRICHMENT,
            amount:  5.0,
        };
        let material = Material::new(5.0, fuel_comp());
        t.receive_material(Tick(0), vec![TradeResponse { trade, material }]).unwrap();
        assert_eq!(t, truck());
    }

    #[test]
    fn pickup_overflow_is_fatal() {
        let mut t = truck();
        contracted(&mut t, 5.0);
        let ports = t.request_material(Tick(1));
        let book = RequestBook::from_ports([(TRUCK, ports[0].clone())]);
        let trade = Trade {
            id:      TradeId(0),
            request: book.requests()[0].clone(),
            bidder:  ENRICHMENT,
            amount:  12.0,
        };
        let material = Material::new(12.0, fuel_comp());
        let err = t.receive_material(Tick(1), vec![TradeResponse { trade, material }]).unwrap_err();
        assert!(matches!(err, ExchangeError::Material(MaterialError::CapacityExceeded { .. })));
        assert!(t.inventory().is_empty());
    }

    #[test]
    fn pickup_overflow_across_batches_keeps_nothing() {
        let mut t = truck();
        contracted(&mut t, 5.0);
        let ports = t.request_material(Tick(1));
        let book = RequestBook::from_ports([(TRUCK, ports[0].clone())]);
        let responses: Vec<_> = (0..2)
            .map(|i| TradeResponse {
                trade:    Trade {
                    id:      TradeId(i),
                    request: book.requests()[0].clone(),
                    bidder:  ENRICHMENT,
                    amount:  6.0,
                },
                material: Material::new(6.0, fuel_comp()),
            })
            .collect();

        let err = t.receive_material(Tick(1), responses).unwrap_err();
        assert!(matches!(err, ExchangeError::Material(MaterialError::CapacityExceeded { .. })));
        assert!(t.inventory().is_empty());
        assert_eq!(t.phase(), TruckPhase::AwaitingPickup);
    }

    #[test]
    fn snapshot_reports_phase_and_load() {
        let t = arrived(5.0);
        let snap = t.snapshot();
        assert_eq!(snap.agent, TRUCK);
        assert_eq!(snap.phase, "arrived");
        assert_eq!(snap.inventory, 5.0);
    }
}

// ── Full round trip ───────────────────────────────────────────────────────────

#[cfg(test)]
mod round_trip_tests {
    use super::*;

    /// capacity 10, duration 3, "U" → "Fuel", reactor 7 wants 5 units.
    #[test]
    fn documented_scenario() {
        let mut t = truck();
        let book = reactor_book(5.0);

        // Step 1: seeking, fan-out bid on the reactor's offer, contract clears.
        t.advance(Tick(1));
        assert_eq!(t.phase(), TruckPhase::Seeking);
        let ports = t.bid_on_requests(Tick(1), &book);
        assert_eq!(ports[0].bids[0].requester, REACTOR);
        t.commit_trades(Tick(1), &[trade_for(&ports[0], TRUCK, 5.0)]).unwrap();
        assert_eq!(t.contractee(), Some(REACTOR));
        assert_eq!(t.contract().map(|c| c.quantity), Some(5.0));

        // Step 2: request 5 U and receive it.
        t.advance(Tick(2));
        let req = t.request_material(Tick(2));
        assert_eq!(req.len(), 1);
        assert_eq!((req[0].commodity.as_str(), req[0].target.quantity), ("U", 5.0));
        picked_up(&mut t, 5.0);
        assert_eq!(t.inventory().count(), 1);
        assert_eq!(t.trip_time(), Some(0));

        // Steps 3–5: haul.
        for (tick, expected) in [(3, 1), (4, 2), (5, 3)] {
            t.advance(Tick(tick));
            assert_eq!(t.trip_time(), Some(expected));
            assert_invariants(&t);
        }
        assert_eq!(t.phase(), TruckPhase::Arrived);

        // Step 5: deliver to the reactor.
        let ports = t.bid_on_requests(Tick(5), &book);
        assert_eq!(ports[0].bids[0].commodity, "Fuel");
        assert_eq!(ports[0].bids[0].requester, REACTOR);
        t.commit_trades(Tick(5), &[trade_for(&ports[0], TRUCK, 5.0)]).unwrap();
        assert!(t.inventory().is_empty());
        assert_eq!(t.contractee(), None);
        assert_eq!(t.return_trip_time(), Some(0));

        // Steps 6–8: return, resetting on the third step.
        t.advance(Tick(6));
        assert_eq!(t.return_trip_time(), Some(1));
        t.advance(Tick(7));
        assert_eq!(t.return_trip_time(), Some(2));
        t.advance(Tick(8));
        assert_eq!(t.return_trip_time(), None);
        assert_eq!(t.phase(), TruckPhase::Seeking);
    }

    #[test]
    fn full_cycle_restores_initial_state() {
        let initial = truck();
        let mut t = arrived(5.0);
        let ports = t.bid_on_requests(Tick(5), &reactor_book(5.0));
        t.commit_trades(Tick(5), &[trade_for(&ports[0], TRUCK, 5.0)]).unwrap();
        for tick in 6..9 {
            assert_invariants(&t);
            t.advance(Tick(tick));
        }
        assert_eq!(t, initial);
    }

    #[test]
    fn invariants_hold_over_many_cycles() {
        let mut t = truck();
        let book = reactor_book(5.0);
        let mut deliveries = 0;

        for tick in 0..60 {
            let tick = Tick(tick);
            t.advance(tick);
            assert_invariants(&t);

            if let Some(port) = t.request_material(tick).into_iter().next() {
                let pickup = RequestBook::from_ports([(TRUCK, port)]);
                let trade = Trade {
                    id:      TradeId(0),
                    request: pickup.requests()[0].clone(),
                    bidder:  ENRICHMENT,
                    amount:  5.0,
                };
                let material = Material::new(5.0, fuel_comp());
                t.receive_material(tick, vec![TradeResponse { trade, material }]).unwrap();
            } else if let Some(port) = t.bid_on_requests(tick, &book).into_iter().next() {
                let responses = t.commit_trades(tick, &[trade_for(&port, TRUCK, 5.0)]).unwrap();
                deliveries += responses.len();
            }
            assert_invariants(&t);
        }

        // Seven ticks per cycle: the return leg ends on the same tick the
        // next contract clears.  Deliveries land on ticks 4, 11, …, 53.
        assert_eq!(deliveries, 8);
    }
}
