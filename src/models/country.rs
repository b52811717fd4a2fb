use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Country attributes as returned by the info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRecord {
    pub name: String,
    pub continents: Vec<String>,
    pub population: u64,
    pub languages: HashMap<String, String>,
    pub borders: Vec<String>,
    pub flag: String,
    pub capital: Vec<String>,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestCountryName {
    #[serde(default)]
    pub common: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RestCountryFlags {
    pub png: Option<String>,
    pub svg: Option<String>,
}

/// One element of the country-lookup provider's `alpha/{code}` array.
#[derive(Debug, Clone, Deserialize)]
pub struct RestCountry {
    #[serde(default)]
    pub name: RestCountryName,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: HashMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    pub flag: Option<String>,
    pub flags: Option<RestCountryFlags>,
    #[serde(default)]
    pub capital: Vec<String>,
}

impl From<RestCountry> for CountryRecord {
    fn from(country: RestCountry) -> Self {
        let flag = country
            .flags
            .and_then(|flags| flags.png.or(flags.svg))
            .or(country.flag)
            .unwrap_or_default();

        Self {
            name: country.name.common,
            continents: country.continents,
            population: country.population,
            languages: country.languages,
            borders: country.borders,
            flag,
            capital: country.capital,
            cities: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Iso3Lookup {
    #[serde(rename = "cca3")]
    pub iso3: String,
}

/// Body of the cities provider's `countries/cities` response.
#[derive(Debug, Clone, Deserialize)]
pub struct CitiesResponse {
    #[serde(default)]
    pub data: Vec<String>,
}
