mod helmholtz;
mod pressure;
mod properties;
