use midining_shared::Coordinate;
use serde::Deserialize;

const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1&destination=";

/// Where a dining hall is and how to route to it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HallLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

impl HallLocation {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn directions_url(&self) -> String {
        directions_url(&self.address)
    }
}

/// Map-directions link for a destination address.
pub fn directions_url(address: &str) -> String {
    format!("{DIRECTIONS_URL}{}", urlencoding::encode(address))
}

#[derive(Debug, Clone, PartialEq)]
pub struct HallDirectory {
    halls: Vec<HallLocation>,
}

impl HallDirectory {
    pub fn new(halls: Vec<HallLocation>) -> Self {
        Self { halls }
    }

    /// Looks a hall up by name, ignoring case and `-`/space differences
    /// ("Mosher Jordan" finds "Mosher-Jordan").
    pub fn find(&self, name: &str) -> Option<&HallLocation> {
        let wanted = normalize(name);
        self.halls.iter().find(|hall| normalize(&hall.name) == wanted)
    }

    pub fn halls(&self) -> &[HallLocation] {
        &self.halls
    }
}

impl Default for HallDirectory {
    fn default() -> Self {
        let hall = |name: &str, latitude: f64, longitude: f64, address: &str| HallLocation {
            name: name.to_owned(),
            latitude,
            longitude,
            address: address.to_owned(),
        };

        Self::new(vec![
            hall(
                "Bursley",
                42.296152151463275,
                -83.71031104510504,
                "1931 Duffield St, Ann Arbor, MI 48109",
            ),
            hall(
                "East Quad",
                42.27308724683324,
                -83.73523173347121,
                "701 E University Ave, Ann Arbor, MI 48109",
            ),
            hall(
                "Markley",
                42.28105576454475,
                -83.72888983161529,
                "1503 Washington Heights, Ann Arbor, MI 48109",
            ),
            hall(
                "Mosher-Jordan",
                42.28014917899281,
                -83.73153330135683,
                "200 Observatory St, Ann Arbor, MI 48109",
            ),
            hall(
                "North Quad",
                42.280668689896245,
                -83.74012628743262,
                "105 S State St, Ann Arbor, MI 48109",
            ),
            hall(
                "South Quad",
                42.273867238346284,
                -83.74207111626943,
                "600 E Madison St, Ann Arbor, MI 48109",
            ),
        ])
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
