//! Event vocabulary and station numbering of the park.

use std::fmt;

use des_core::StationId;

pub const TICKET_BOOTH: StationId = StationId(0);
pub const REST_AREA: StationId = StationId(1);
pub const ATTRACTIONS: [StationId; 3] = [StationId(2), StationId(3), StationId(4)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParkEvent {
    /// A visitor reaches the ticket booth queue.
    ArrivalTicketBooth,
    DepartureTicketBooth,
    DepartureRest,
    DepartureAttraction1,
    DepartureAttraction2,
    DepartureAttraction3,
}

impl ParkEvent {
    /// Departure kinds of the three attractions, in [`ATTRACTIONS`] order.
    pub const ATTRACTION_DEPARTURES: [ParkEvent; 3] = [
        ParkEvent::DepartureAttraction1,
        ParkEvent::DepartureAttraction2,
        ParkEvent::DepartureAttraction3,
    ];

    /// The station a departure event frees; `None` for arrivals.
    pub fn departure_station(self) -> Option<StationId> {
        match self {
            ParkEvent::ArrivalTicketBooth => None,
            ParkEvent::DepartureTicketBooth => Some(TICKET_BOOTH),
            ParkEvent::DepartureRest => Some(REST_AREA),
            ParkEvent::DepartureAttraction1 => Some(ATTRACTIONS[0]),
            ParkEvent::DepartureAttraction2 => Some(ATTRACTIONS[1]),
            ParkEvent::DepartureAttraction3 => Some(ATTRACTIONS[2]),
        }
    }
}

impl fmt::Display for ParkEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParkEvent::ArrivalTicketBooth => "ARRIVAL_TICKETBOOTH",
            ParkEvent::DepartureTicketBooth => "DEPARTURE_TICKETBOOTH",
            ParkEvent::DepartureRest => "DEPARTURE_REST",
            ParkEvent::DepartureAttraction1 => "DEPARTURE_ATTRACTION1",
            ParkEvent::DepartureAttraction2 => "DEPARTURE_ATTRACTION2",
            ParkEvent::DepartureAttraction3 => "DEPARTURE_ATTRACTION3",
        };
        f.write_str(name)
    }
}
