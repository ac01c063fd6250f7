//! Offline place lookup.
//!
//! A fixed table of Korean cities and Seoul landmarks, used to turn a
//! free-text query into a coordinate without a geocoding service.

use crate::domain::Coordinate;

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTIONS: usize = 5;

/// A known place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    pub name: &'static str,
    pub address: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Place {
    const fn new(name: &'static str, address: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            address,
            lat,
            lng,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
            .with_name(self.name)
            .with_address(self.address)
    }
}

/// Known places, in lookup order.
pub const PLACES: &[Place] = &[
    // Seoul
    Place::new("서울", "서울특별시", 37.5665, 126.9780),
    Place::new(
        "서울역",
        "서울특별시 용산구 서울역",
        37.5546788,
        126.9709914,
    ),
    Place::new("강남", "서울특별시 강남구", 37.4979, 127.0276),
    Place::new(
        "강남역",
        "서울특별시 강남구 강남역",
        37.4979462,
        127.0276368,
    ),
    Place::new("홍대", "서울특별시 마포구 홍대입구역", 37.5565, 126.9235),
    Place::new(
        "홍대입구역",
        "서울특별시 마포구 홍대입구역",
        37.5565,
        126.9235,
    ),
    Place::new("명동", "서울특별시 중구 명동", 37.5636, 126.9826),
    Place::new("잠실", "서울특별시 송파구 잠실", 37.5133, 127.1000),
    Place::new("여의도", "서울특별시 영등포구 여의도", 37.5219, 126.9245),
    // Gyeonggi and Incheon
    Place::new("인천", "인천광역시", 37.4563, 126.7052),
    Place::new("수원", "경기도 수원시", 37.2636, 127.0286),
    Place::new("성남", "경기도 성남시", 37.4201, 127.1262),
    Place::new("용인", "경기도 용인시", 37.2411, 127.1776),
    Place::new("고양", "경기도 고양시", 37.6584, 126.8320),
    Place::new("부천", "경기도 부천시", 37.5034, 126.7660),
    Place::new("안산", "경기도 안산시", 37.3219, 126.8309),
    Place::new("안양", "경기도 안양시", 37.3943, 126.9568),
    Place::new("평택", "경기도 평택시", 36.9921, 127.1128),
    // Metropolitan cities
    Place::new("부산", "부산광역시", 35.1796, 129.0756),
    Place::new("대구", "대구광역시", 35.8714, 128.6014),
    Place::new("대전", "대전광역시", 36.3504, 127.3845),
    Place::new("광주", "광주광역시", 35.1595, 126.8526),
    Place::new("울산", "울산광역시", 35.5384, 129.3114),
    Place::new("세종", "세종특별자치시", 36.4800, 127.2890),
    // Gangwon
    Place::new("춘천", "강원도 춘천시", 37.8813, 127.7298),
    Place::new("원주", "강원도 원주시", 37.3422, 127.9202),
    Place::new("강릉", "강원도 강릉시", 37.7519, 128.8761),
    Place::new("속초", "강원도 속초시", 38.2070, 128.5918),
    // Chungcheong
    Place::new("청주", "충청북도 청주시", 36.6424, 127.4890),
    Place::new("충주", "충청북도 충주시", 36.9910, 127.9260),
    Place::new("천안", "충청남도 천안시", 36.8151, 127.1139),
    Place::new("아산", "충청남도 아산시", 36.7898, 127.0016),
    Place::new("공주", "충청남도 공주시", 36.4465, 127.1189),
    // Jeolla
    Place::new("전주", "전라북도 전주시", 35.8242, 127.1480),
    Place::new("익산", "전라북도 익산시", 35.9483, 126.9575),
    Place::new("군산", "전라북도 군산시", 35.9676, 126.7368),
    Place::new("목포", "전라남도 목포시", 34.8118, 126.3922),
    Place::new("여수", "전라남도 여수시", 34.7604, 127.6622),
    Place::new("순천", "전라남도 순천시", 34.9506, 127.4872),
    // Gyeongsang
    Place::new("포항", "경상북도 포항시", 36.0190, 129.3435),
    Place::new("경주", "경상북도 경주시", 35.8562, 129.2247),
    Place::new("안동", "경상북도 안동시", 36.5684, 128.7294),
    Place::new("창원", "경상남도 창원시", 35.2280, 128.6811),
    Place::new("진주", "경상남도 진주시", 35.1800, 128.1076),
    Place::new("김해", "경상남도 김해시", 35.2285, 128.8894),
    // Jeju
    Place::new("제주", "제주특별자치도 제주시", 33.4996, 126.5312),
    Place::new("서귀포", "제주특별자치도 서귀포시", 33.2541, 126.5601),
];

/// Find the best match for `query`.
///
/// Tries an exact name match, then a name that contains (or is contained
/// in) the query, then an address containing the query.
pub fn find_place(query: &str) -> Option<&'static Place> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    PLACES
        .iter()
        .find(|p| p.name.to_lowercase() == query)
        .or_else(|| {
            PLACES.iter().find(|p| {
                let name = p.name.to_lowercase();
                name.contains(&query) || query.contains(&name)
            })
        })
        .or_else(|| {
            PLACES
                .iter()
                .find(|p| p.address.to_lowercase().contains(&query))
        })
}

/// Resolve `query` to a named coordinate.
pub fn search_place(query: &str) -> Option<Coordinate> {
    find_place(query).map(Place::coordinate)
}

/// Names containing `query`, in table order, at most `limit` of them.
pub fn suggestions(query: &str, limit: usize) -> Vec<&'static str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    PLACES
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query))
        .map(|p| p.name)
        .take(limit)
        .collect()
}
