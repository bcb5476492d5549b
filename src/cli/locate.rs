use anyhow::Result;
use ino_core::ResourceEnvironment;

use super::as_strs;

pub struct SearchArgs<'a> {
    pub key: &'a str,
    pub items: &'a [String],
    pub places: &'a [String],
    pub name: Option<&'a str>,
}

pub fn run_tool(env: &mut ResourceEnvironment, args: &SearchArgs<'_>) -> Result<()> {
    let items = if args.items.is_empty() {
        vec![args.key]
    } else {
        as_strs(args.items)
    };
    let places = as_strs(args.places);
    let found = env.find_tool(args.key, &items, Some(places.as_slice()), args.name)?;
    println!("{found}");
    Ok(())
}

pub fn run_file(env: &mut ResourceEnvironment, args: &SearchArgs<'_>) -> Result<()> {
    let found = env.find_file(
        args.key,
        &as_strs(args.items),
        &as_strs(args.places),
        args.name,
    )?;
    println!("{found}");
    Ok(())
}

pub fn run_dir(env: &mut ResourceEnvironment, args: &SearchArgs<'_>) -> Result<()> {
    let found = env.find_dir(
        args.key,
        &as_strs(args.items),
        &as_strs(args.places),
        args.name,
    )?;
    println!("{found}");
    Ok(())
}

pub fn run_arduino_dir(
    env: &mut ResourceEnvironment,
    key: &str,
    subpath: &[String],
    items: &[String],
    name: Option<&str>,
) -> Result<()> {
    let found = env.find_arduino_dir(key, &as_strs(subpath), &as_strs(items), name)?;
    println!("{found}");
    Ok(())
}

pub fn run_arduino_file(
    env: &mut ResourceEnvironment,
    key: &str,
    subpath: &[String],
    name: Option<&str>,
) -> Result<()> {
    let found = env.find_arduino_file(key, &as_strs(subpath), name)?;
    println!("{found}");
    Ok(())
}

pub fn run_arduino_tool(
    env: &mut ResourceEnvironment,
    key: &str,
    subpath: &[String],
    name: Option<&str>,
) -> Result<()> {
    let found = env.find_arduino_tool(key, &as_strs(subpath), name)?;
    println!("{found}");
    Ok(())
}

pub fn run_places(env: &ResourceEnvironment, parts: &[String]) {
    for place in env.arduino_dist_places(&as_strs(parts)) {
        println!("{place}");
    }
}
