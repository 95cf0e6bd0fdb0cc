mod attr_map;
mod value;
