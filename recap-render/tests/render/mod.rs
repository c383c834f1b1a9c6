mod basics;
mod code;
mod links;
mod timestamps;
