/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Server region codes accepted by the counter endpoints.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Photon server regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Region {
  Asia,
  Australia,
  CanadaEast,
  /// Chinese Mainland
  ChineseMainland,
  Europe,
  India,
  Japan,
  Russia,
  RussiaEast,
  SouthAfrica,
  SouthAmerica,
  SouthKorea,
  /// USA East
  UsaEast,
  /// USA West
  UsaWest,
}

impl Region {
  /// All known regions
  pub const ALL: [Region; 14] = [
    Region::Asia,
    Region::Australia,
    Region::CanadaEast,
    Region::ChineseMainland,
    Region::Europe,
    Region::India,
    Region::Japan,
    Region::Russia,
    Region::RussiaEast,
    Region::SouthAfrica,
    Region::SouthAmerica,
    Region::SouthKorea,
    Region::UsaEast,
    Region::UsaWest,
  ];

  /// Region code as it appears in request paths
  pub fn as_str(&self) -> &'static str {
    match self {
      Region::Asia => "asia",
      Region::Australia => "au",
      Region::CanadaEast => "cae",
      Region::ChineseMainland => "cn",
      Region::Europe => "eu",
      Region::India => "in",
      Region::Japan => "jp",
      Region::Russia => "ru",
      Region::RussiaEast => "rue",
      Region::SouthAfrica => "za",
      Region::SouthAmerica => "sa",
      Region::SouthKorea => "kr",
      Region::UsaEast => "us",
      Region::UsaWest => "usw",
    }
  }
}

impl std::fmt::Display for Region {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Region {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let code = s.to_lowercase();
    Region::ALL
      .into_iter()
      .find(|r| r.as_str() == code)
      .ok_or_else(|| format!("unknown region: {}", s))
  }
}

impl TryFrom<String> for Region {
  type Error = String;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<Region> for String {
  fn from(region: Region) -> Self {
    region.as_str().to_string()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_region_codes() {
    assert_eq!(Region::Japan.to_string(), "jp");
    assert_eq!(Region::UsaWest.as_str(), "usw");
    assert_eq!(String::from(Region::ChineseMainland), "cn");
  }

  #[test]
  fn test_region_from_str() {
    assert_eq!("jp".parse::<Region>().unwrap(), Region::Japan);
    assert_eq!("RUE".parse::<Region>().unwrap(), Region::RussiaEast);
    assert!("mars".parse::<Region>().is_err());
  }

  #[test]
  fn test_region_serde() {
    assert_eq!(serde_json::to_string(&Region::SouthKorea).unwrap(), "\"kr\"");
    let region: Region = serde_json::from_str("\"eu\"").unwrap();
    assert_eq!(region, Region::Europe);
  }
}
