mod balance;
mod helpers;
mod login;
