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

//! Counter types (metric templates) exposed by the analytics service.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Counter templates. The wire name is the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterType {
  TrafficMultiplayer,
  TrafficChat,
  Rooms,
  Channels,
  Messages,
  /// Concurrent users
  Ccu,
  Rejects,
  DisconnectRate,
  MessagesPerRoom,
  MessagesPerChannel,
  MessagesPerCcu,
}

impl CounterType {
  /// All known counter types
  pub const ALL: [CounterType; 11] = [
    CounterType::TrafficMultiplayer,
    CounterType::TrafficChat,
    CounterType::Rooms,
    CounterType::Channels,
    CounterType::Messages,
    CounterType::Ccu,
    CounterType::Rejects,
    CounterType::DisconnectRate,
    CounterType::MessagesPerRoom,
    CounterType::MessagesPerChannel,
    CounterType::MessagesPerCcu,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      CounterType::TrafficMultiplayer => "TrafficMultiplayer",
      CounterType::TrafficChat => "TrafficChat",
      CounterType::Rooms => "Rooms",
      CounterType::Channels => "Channels",
      CounterType::Messages => "Messages",
      CounterType::Ccu => "Ccu",
      CounterType::Rejects => "Rejects",
      CounterType::DisconnectRate => "DisconnectRate",
      CounterType::MessagesPerRoom => "MessagesPerRoom",
      CounterType::MessagesPerChannel => "MessagesPerChannel",
      CounterType::MessagesPerCcu => "MessagesPerCcu",
    }
  }
}

impl std::fmt::Display for CounterType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for CounterType {
  type Err = String;

  /// Case-insensitive, so `ccu` and `Ccu` both work from the command line
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    CounterType::ALL
      .into_iter()
      .find(|c| c.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| format!("unknown counter type: {}", s))
  }
}

impl From<CounterType> for String {
  fn from(counter: CounterType) -> Self {
    counter.as_str().to_string()
  }
}
