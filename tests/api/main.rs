mod health_check;
mod order;
