pub use std::borrow::{Borrow, Cow};
pub use std::cmp;
pub use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
pub use std::convert::{TryFrom, TryInto};
pub use std::env;
pub use std::error::Error as StdError;
pub use std::fmt;
pub use std::hash::{Hash, Hasher};
pub use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
pub use std::iter::{self, FromIterator};
pub use std::slice;
pub use std::str;

#[cfg(feature = "anyhow")]
pub use ::anyhow::{
  self, bail, ensure, format_err, Context as ResultContextExt, Error as AnyError,
  Result as AnyResult,
};
#[cfg(feature = "log")]
pub use ::log::{self, debug, error, info, log, log_enabled, trace, warn, Level as LogLevel};
